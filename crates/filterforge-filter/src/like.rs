//! LIKE pattern matching.
//!
//! Patterns use `%` as the only wildcard. Everything else is matched
//! literally and the match always covers the whole string. Case-insensitive
//! matching uppercases both the pattern and the value.

use std::borrow::Cow;

use filterforge_core::{FilterForgeError, Result};
use regex::Regex;
use tracing::trace;

/// A LIKE pattern compiled to an anchored regular expression.
#[derive(Debug, Clone)]
pub struct LikePattern {
    regex: Regex,
    case_sensitive: bool,
}

impl LikePattern {
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let pattern: Cow<'_, str> = if case_sensitive {
            Cow::Borrowed(pattern)
        } else {
            Cow::Owned(pattern.to_uppercase())
        };

        let body = pattern
            .split('%')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^(?s:{})$", body)).map_err(|e| {
            FilterForgeError::InvalidFilter(format!("LIKE pattern '{}': {}", pattern, e))
        })?;

        trace!(
            event = "like_compiled",
            pattern = %pattern,
            regex = regex.as_str(),
            case_sensitive,
        );

        Ok(Self {
            regex,
            case_sensitive,
        })
    }

    pub fn is_match(&self, value: &str) -> bool {
        if self.case_sensitive {
            self.regex.is_match(value)
        } else {
            self.regex.is_match(&value.to_uppercase())
        }
    }
}
