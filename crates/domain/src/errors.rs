//! Domain-level errors

use thiserror::Error;

/// Message reported when a workspace name does not match the naming grammar
pub const INVALID_WORKSPACE_NAME_MESSAGE: &str = "Incorrect workspace name, it must be between 3 and 20 characters and may contain digits, latin letters, underscores, dots, dashes and must start and end only with digits, latin letters or underscores";

/// A single violated workspace configuration invariant
///
/// Each variant carries the identifiers needed to build its message; the
/// message text itself is produced by `Display` and is part of the public
/// contract, so callers may match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Workspace name is missing or empty
    #[error("Workspace name required")]
    NameRequired,

    /// Workspace name does not match the naming grammar
    #[error("{}", INVALID_WORKSPACE_NAME_MESSAGE)]
    InvalidName,

    /// Attribute key is missing, empty or uses the reserved prefix
    #[error("Attribute name '{}' is not valid", .key.as_deref().unwrap_or("null"))]
    InvalidAttributeName { key: Option<String> },

    /// Default environment name is missing or empty
    #[error("Workspace default environment name required")]
    DefaultEnvNameRequired,

    /// No environment matches the default environment name
    #[error("Workspace default environment configuration required")]
    DefaultEnvConfigRequired,

    /// An environment is declared under an empty name
    #[error("Workspace {workspace} contains environment with null or empty name")]
    EnvironmentNameRequired { workspace: String },

    /// Environment has no recipe
    #[error("Environment '{environment}' recipe required")]
    RecipeRequired { environment: String },

    /// Environment recipe has no type
    #[error("Environment '{environment}' recipe type required")]
    RecipeTypeRequired { environment: String },

    /// Environment recipe has no content
    #[error("Environment '{environment}' recipe content required")]
    RecipeContentRequired { environment: String },

    /// A machine is declared under an empty name
    #[error("Environment '{environment}' contains machine with null or empty name")]
    MachineNameRequired { environment: String },

    /// A machine lists an empty installer
    #[error(
        "Machine '{machine}' in environment '{environment}' contains installer with null or empty name"
    )]
    InstallerRequired { environment: String, machine: String },

    /// A server is declared under an empty reference
    #[error(
        "Machine '{machine}' in environment '{environment}' contains server with null or empty reference"
    )]
    ServerRefRequired { environment: String, machine: String },

    /// A declared server has no port
    #[error("Machine '{machine}' in environment '{environment}' contains server '{server}' without port")]
    ServerPortRequired {
        environment: String,
        machine: String,
        server: String,
    },

    /// A declared server port is malformed
    #[error(
        "Machine '{machine}' in environment '{environment}' contains server '{server}' with invalid port '{port}'"
    )]
    InvalidServerPort {
        environment: String,
        machine: String,
        server: String,
        port: String,
    },

    /// A declared server protocol is malformed
    #[error(
        "Machine '{machine}' in environment '{environment}' contains server '{server}' with invalid protocol '{protocol}'"
    )]
    InvalidServerProtocol {
        environment: String,
        machine: String,
        server: String,
        protocol: String,
    },

    /// A command is missing its name
    #[error("Workspace {workspace} contains command with null or empty name")]
    CommandNameRequired { workspace: String },

    /// A command is missing its command line
    #[error("Command line required for command '{command}'")]
    CommandLineRequired { command: String },
}

impl ValidationError {
    /// Create an invalid attribute name error
    pub fn invalid_attribute(key: Option<&str>) -> Self {
        Self::InvalidAttributeName {
            key: key.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_required_message() {
        assert_eq!(
            ValidationError::NameRequired.to_string(),
            "Workspace name required"
        );
    }

    #[test]
    fn invalid_name_message() {
        assert_eq!(
            ValidationError::InvalidName.to_string(),
            INVALID_WORKSPACE_NAME_MESSAGE
        );
    }

    #[test]
    fn null_attribute_key_renders_as_null() {
        let err = ValidationError::invalid_attribute(None);
        assert_eq!(err.to_string(), "Attribute name 'null' is not valid");
    }

    #[test]
    fn attribute_key_is_interpolated() {
        let err = ValidationError::invalid_attribute(Some("codenvy_key"));
        assert_eq!(err.to_string(), "Attribute name 'codenvy_key' is not valid");
    }

    #[test]
    fn command_errors_name_their_subject() {
        let err = ValidationError::CommandNameRequired {
            workspace: "ws-name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Workspace ws-name contains command with null or empty name"
        );

        let err = ValidationError::CommandLineRequired {
            command: "build".to_string(),
        };
        assert_eq!(err.to_string(), "Command line required for command 'build'");
    }

    #[test]
    fn server_port_message() {
        let err = ValidationError::InvalidServerPort {
            environment: "dev-env".to_string(),
            machine: "db".to_string(),
            server: "ref1".to_string(),
            port: "0/tcp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Machine 'db' in environment 'dev-env' contains server 'ref1' with invalid port '0/tcp'"
        );
    }
}
