//! Workspace name value object with grammar validation
//!
//! A workspace name is 3 to 20 characters long. Interior characters may be
//! latin letters, digits, underscores, dots or dashes; the first and last
//! characters must be latin letters or digits.
//!
//! # Examples
//!
//! ```
//! use domain::WorkspaceName;
//!
//! let name = WorkspaceName::new("name-with-dashes").unwrap();
//! assert_eq!(name.as_str(), "name-with-dashes");
//!
//! assert!(WorkspaceName::new(".name").is_err());
//! assert!(WorkspaceName::new("name_").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A workspace name that matches the naming grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkspaceName {
    value: String,
}

impl WorkspaceName {
    /// Minimum name length
    pub const MIN_LEN: usize = 3;
    /// Maximum name length
    pub const MAX_LEN: usize = 20;

    /// Create a new workspace name, validating the grammar
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameRequired`] for an empty name and
    /// [`ValidationError::InvalidName`] when the grammar does not match.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let value = name.into();

        if value.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidName);
        }

        Ok(Self { value })
    }

    /// Check a candidate name against the grammar without allocating
    pub fn is_valid(name: &str) -> bool {
        let bytes = name.as_bytes();
        let (Some(&first), Some(&last)) = (bytes.first(), bytes.last()) else {
            return false;
        };

        (Self::MIN_LEN..=Self::MAX_LEN).contains(&bytes.len())
            && first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && bytes
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for WorkspaceName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for WorkspaceName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkspaceName> for String {
    fn from(name: WorkspaceName) -> Self {
        name.value
    }
}
