//! Domain entities - The workspace configuration document model

mod command;
mod environment;
mod machine_config;
mod workspace_config;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

pub use command::Command;
pub use environment::{Environment, Recipe};
pub use machine_config::{MachineConfig, ServerConfig};
pub use workspace_config::WorkspaceConfig;

/// Attribute map, iterated in declaration order
///
/// Keys are nullable so that a document with a null key (e.g. YAML `~:`)
/// still loads and is rejected by the validator with a precise message.
pub type Attributes = IndexMap<Option<String>, String>;

/// Deserialize an optional collection, treating an explicit `null` as empty
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
