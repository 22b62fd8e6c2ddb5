//! Sample entity metadata.
//!
//! # Example
//!
//! ```
//! use filterforge_core::AttributeKind;
//! use filterforge_test::metadata::employee_metadata;
//!
//! let metadata = employee_metadata();
//! assert_eq!(metadata.attribute("tags").unwrap().kind, AttributeKind::ToMany);
//! ```

use filterforge_core::{AttributeMetadata, EntityMetadata};

/// Employee entity touching every attribute kind:
///
/// | path | kind | notes |
/// |------|------|-------|
/// | `name` | basic | |
/// | `status` | basic | multiple values allowed |
/// | `tags` | to-many | |
/// | `nicknames` | element collection | |
/// | `department` | to-one | searched on `department.id`, nested metadata |
/// | `department.site` | to-one | replacement path `department.siteId` |
/// | `manager` | to-one | replacement path `manager.id` |
/// | `projects` | to-many | searched on `projects.code` |
pub fn employee_metadata() -> EntityMetadata {
    EntityMetadata::new(
        "Employee",
        vec![
            AttributeMetadata::basic("name"),
            AttributeMetadata::basic("status").with_multiple_values(),
            AttributeMetadata::to_many("tags"),
            AttributeMetadata::element_collection("nicknames"),
            AttributeMetadata::to_one("department")
                .with_actual_search_path("department.id")
                .with_nested(department_metadata()),
            AttributeMetadata::to_one("manager").with_replacement_search_path("manager.id"),
            AttributeMetadata::to_many("projects").with_actual_search_path("projects.code"),
        ],
    )
}

/// Department entity nested under [`employee_metadata`].
pub fn department_metadata() -> EntityMetadata {
    EntityMetadata::new(
        "Department",
        vec![
            AttributeMetadata::basic("department.name"),
            AttributeMetadata::to_one("department.site")
                .with_replacement_search_path("department.siteId"),
        ],
    )
}
