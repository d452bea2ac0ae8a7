//! Runtime environment and recipe entities

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::MachineConfig;

/// Recipe describing how an environment is built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe type (e.g. `dockerimage`, `compose`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub recipe_type: Option<String>,
    /// Recipe body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// MIME type of the recipe body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Recipe {
    /// Create a recipe with a type and content
    pub fn new(recipe_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            recipe_type: Some(recipe_type.into()),
            content: Some(content.into()),
            content_type: None,
        }
    }

    /// Set the content MIME type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// A named grouping of machines built from one recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Recipe the environment is built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    /// Machines, in declaration order
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub machines: IndexMap<String, MachineConfig>,
}

impl Environment {
    /// Create an environment from a recipe
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe: Some(recipe),
            machines: IndexMap::new(),
        }
    }

    /// Add a named machine
    #[must_use]
    pub fn with_machine(mut self, name: impl Into<String>, machine: MachineConfig) -> Self {
        self.machines.insert(name.into(), machine);
        self
    }
}
