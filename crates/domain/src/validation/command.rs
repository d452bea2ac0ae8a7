//! Command checks, run in declaration order; the first bad command wins.

use super::attributes::validate_attributes;
use super::helpers::require;
use crate::entities::{Command, WorkspaceConfig};
use crate::errors::ValidationError;

pub(super) fn check_commands(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    config
        .commands
        .iter()
        .try_for_each(|command| validate_command(config.name_or_empty(), command))
}

fn validate_command(workspace: &str, command: &Command) -> Result<(), ValidationError> {
    let name = require(command.name.as_deref(), || {
        ValidationError::CommandNameRequired {
            workspace: workspace.to_string(),
        }
    })?;

    require(command.command_line.as_deref(), || {
        ValidationError::CommandLineRequired {
            command: name.to_string(),
        }
    })?;

    validate_attributes(&command.attributes)
}
