//! Environment checks: recipe presence, machines and their servers.
//!
//! [`check_environments`] is part of the required chain. The stricter
//! [`check_environment_details`] only runs on request.

use super::attributes::validate_attributes;
use super::helpers::require;
use crate::entities::{Environment, MachineConfig, ServerConfig, WorkspaceConfig};
use crate::errors::ValidationError;
use crate::value_objects::{is_valid_server_port, is_valid_server_protocol};

pub(super) fn check_environments(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    config
        .environments
        .iter()
        .flatten()
        .try_for_each(|(name, environment)| validate_environment(name, environment))
}

fn validate_environment(name: &str, environment: &Environment) -> Result<(), ValidationError> {
    if environment.recipe.is_none() {
        return Err(ValidationError::RecipeRequired {
            environment: name.to_string(),
        });
    }

    environment
        .machines
        .iter()
        .try_for_each(|(machine_name, machine)| validate_machine(name, machine_name, machine))
}

fn validate_machine(
    environment: &str,
    name: &str,
    machine: &MachineConfig,
) -> Result<(), ValidationError> {
    validate_attributes(&machine.attributes)?;

    machine.servers.iter().try_for_each(|(reference, server)| {
        require(server.port.as_deref(), || {
            ValidationError::ServerPortRequired {
                environment: environment.to_string(),
                machine: name.to_string(),
                server: reference.clone(),
            }
        })
        .map(drop)
    })
}

pub(super) fn check_environment_details(config: &WorkspaceConfig) -> Result<(), ValidationError> {
    config
        .environments
        .iter()
        .flatten()
        .try_for_each(|(name, environment)| {
            environment_details(config.name_or_empty(), name, environment)
        })
}

fn environment_details(
    workspace: &str,
    name: &str,
    environment: &Environment,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EnvironmentNameRequired {
            workspace: workspace.to_string(),
        });
    }

    if let Some(recipe) = &environment.recipe {
        require(recipe.recipe_type.as_deref(), || {
            ValidationError::RecipeTypeRequired {
                environment: name.to_string(),
            }
        })?;
        require(recipe.content.as_deref(), || {
            ValidationError::RecipeContentRequired {
                environment: name.to_string(),
            }
        })?;
    }

    environment
        .machines
        .iter()
        .try_for_each(|(machine_name, machine)| machine_details(name, machine_name, machine))
}

fn machine_details(
    environment: &str,
    name: &str,
    machine: &MachineConfig,
) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::MachineNameRequired {
            environment: environment.to_string(),
        });
    }

    if machine.installers.iter().any(String::is_empty) {
        return Err(ValidationError::InstallerRequired {
            environment: environment.to_string(),
            machine: name.to_string(),
        });
    }

    machine
        .servers
        .iter()
        .try_for_each(|(reference, server)| server_details(environment, name, reference, server))
}

fn server_details(
    environment: &str,
    machine: &str,
    reference: &str,
    server: &ServerConfig,
) -> Result<(), ValidationError> {
    if reference.is_empty() {
        return Err(ValidationError::ServerRefRequired {
            environment: environment.to_string(),
            machine: machine.to_string(),
        });
    }

    // Presence is covered by the required chain.
    match server.port.as_deref() {
        Some(port) if !is_valid_server_port(port) => {
            return Err(ValidationError::InvalidServerPort {
                environment: environment.to_string(),
                machine: machine.to_string(),
                server: reference.to_string(),
                port: port.to_string(),
            });
        },
        _ => {},
    }

    // An absent or empty protocol means "unspecified".
    match server.protocol.as_deref() {
        Some(protocol) if !protocol.is_empty() && !is_valid_server_protocol(protocol) => {
            Err(ValidationError::InvalidServerProtocol {
                environment: environment.to_string(),
                machine: machine.to_string(),
                server: reference.to_string(),
                protocol: protocol.to_string(),
            })
        },
        _ => Ok(()),
    }
}
