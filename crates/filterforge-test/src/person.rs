//! Typed candidate fixture.
//!
//! # Example
//!
//! ```
//! use filterforge_core::{PropertyAccessor, Value};
//! use filterforge_test::person::Person;
//!
//! let kevin = Person::new("Kevin").with_age(31).with_city("Ghent");
//! assert_eq!(kevin.resolve("age"), Value::I64(31));
//! assert_eq!(kevin.resolve("address.city"), Value::from("Ghent"));
//! ```

use filterforge_core::{PropertyAccessor, Record, Value};

/// A person with a few optional fields and a nested address.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: Option<i64>,
    pub email: Option<String>,
    pub tags: Vec<String>,
    pub city: Option<String>,
}

impl Person {
    /// Creates a person with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

impl PropertyAccessor for Person {
    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::from(self.name.as_str())),
            "age" => Some(self.age.into()),
            "email" => Some(self.email.clone().into()),
            "tags" => Some(Value::list(self.tags.iter().map(String::as_str))),
            "address" => Some(Value::record(
                Record::new().with("city", self.city.clone()),
            )),
            _ => None,
        }
    }
}
