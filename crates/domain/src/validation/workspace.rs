//! Workspace-level checks: name, attributes and the default environment.

use super::attributes::validate_attributes;
use super::helpers::{is_null_or_empty, require};
use crate::entities::WorkspaceConfig;
use crate::errors::ValidationError;
use crate::value_objects::WorkspaceName;

pub(super) fn check_name_present(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    require(config.name.as_deref(), || ValidationError::NameRequired).map(drop)
}

pub(super) fn check_name_grammar(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    if WorkspaceName::is_valid(config.name_or_empty()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

pub(super) fn check_attributes(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    validate_attributes(&config.attributes)
}

pub(super) fn check_default_env_name(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    require(config.default_env.as_deref(), || {
        ValidationError::DefaultEnvNameRequired
    })
    .map(drop)
}

/// The environment map must exist, be non-empty and hold the default environment.
pub(super) fn check_default_env_config(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    let default_env = config.default_env.as_deref();
    let present = !is_null_or_empty(default_env)
        && config
            .environments
            .as_ref()
            .is_some_and(|envs| default_env.is_some_and(|name| envs.contains_key(name)));

    if present {
        Ok(())
    } else {
        Err(ValidationError::DefaultEnvConfigRequired)
    }
}
