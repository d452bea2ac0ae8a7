//! Workspace command entity

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Attributes;

/// A named executable instruction attached to a workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// Command name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Command type (e.g. `mvn`, `custom`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub command_type: Option<String>,
    /// Shell command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_line: Option<String>,
    /// Free-form command attributes
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub attributes: Attributes,
}

impl Command {
    /// Create a command with a name and command line
    pub fn new(name: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            command_line: Some(command_line.into()),
            ..Self::default()
        }
    }

    /// Set the command type
    #[must_use]
    pub fn with_type(mut self, command_type: impl Into<String>) -> Self {
        self.command_type = Some(command_type.into());
        self
    }

    /// Add a command attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(Some(key.into()), value.into());
        self
    }
}
