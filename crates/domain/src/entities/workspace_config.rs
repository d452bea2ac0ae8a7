//! Workspace configuration entity

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Attributes, Command, Environment};

/// Declarative description of a development workspace
///
/// Nullable fields are kept as `Option` so that a document with missing
/// values can still be represented and rejected by the validator with a
/// precise message instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Workspace name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the environment started by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_env: Option<String>,
    /// Free-form workspace attributes
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub attributes: Attributes,
    /// Named environments, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environments: Option<IndexMap<String, Environment>>,
    /// Commands, in declaration order
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub commands: Vec<Command>,
}

impl WorkspaceConfig {
    /// Create a configuration with the given workspace name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the default environment name
    #[must_use]
    pub fn with_default_env(mut self, default_env: impl Into<String>) -> Self {
        self.default_env = Some(default_env.into());
        self
    }

    /// Add a workspace attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(Some(key.into()), value.into());
        self
    }

    /// Add a named environment
    #[must_use]
    pub fn with_environment(mut self, name: impl Into<String>, environment: Environment) -> Self {
        self.environments
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), environment);
        self
    }

    /// Append a command
    #[must_use]
    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Workspace name, or an empty string when absent
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// The environment referenced by `default_env`, if both exist
    pub fn default_environment(&self) -> Option<&Environment> {
        let name = self.default_env.as_deref()?;
        self.environments.as_ref()?.get(name)
    }

    /// Number of declared environments
    pub fn environment_count(&self) -> usize {
        self.environments.as_ref().map_or(0, IndexMap::len)
    }
}
