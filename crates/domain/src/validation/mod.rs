//! Workspace configuration validation
//!
//! [`ConfigValidator`] walks a [`WorkspaceConfig`] through a fixed, ordered
//! list of checks and stops at the first violation. Each check lives in the
//! submodule for the part of the document it inspects; this module only
//! owns the order.
//!
//! # Examples
//!
//! ```
//! use domain::{Command, ConfigValidator, Environment, Recipe, WorkspaceConfig};
//!
//! let config = WorkspaceConfig::new("ws-name")
//!     .with_default_env("dev-env")
//!     .with_environment("dev-env", Environment::new(Recipe::new("dockerimage", "eclipse/ubuntu_jdk8")))
//!     .with_command(Command::new("build", "mvn clean install"));
//! assert!(ConfigValidator::validate_config(&config).is_ok());
//!
//! let config = WorkspaceConfig { name: None, ..config };
//! let err = ConfigValidator::validate_config(&config).unwrap_err();
//! assert_eq!(err.to_string(), "Workspace name required");
//! ```

mod attributes;
mod command;
mod environment;
mod helpers;
mod workspace;


use crate::entities::WorkspaceConfig;
use crate::errors::ValidationError;
use crate::value_objects::AttributeKey;

type CheckFn = fn(&WorkspaceConfig) -> Result<(), ValidationError>;

/// A named step of the validation chain
#[derive(Clone, Copy)]
struct Check {
    name: &'static str,
    run: CheckFn,
}

/// Validation chain, in reporting order
const CHECKS: &[Check] = &[
    Check {
        name: "name_present",
        run: workspace::check_name_present,
    },
    Check {
        name: "name_grammar",
        run: workspace::check_name_grammar,
    },
    Check {
        name: "attributes",
        run: workspace::check_attributes,
    },
    Check {
        name: "default_env_name",
        run: workspace::check_default_env_name,
    },
    Check {
        name: "default_env_config",
        run: workspace::check_default_env_config,
    },
    Check {
        name: "environments",
        run: environment::check_environments,
    },
    Check {
        name: "commands",
        run: command::check_commands,
    },
];

/// Extra checks run by [`ConfigValidator::validate_config_strict`] after the
/// validation chain has passed
const STRICT_CHECKS: &[Check] = &[Check {
    name: "environment_details",
    run: environment::check_environment_details,
}];

/// Stateless validator for workspace configurations
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a whole configuration, reporting the first violated invariant
    pub fn validate_config(config: &WorkspaceConfig) -> Result<(), ValidationError> {
        CHECKS.iter().try_for_each(|check| (check.run)(config))
    }

    /// Validate a configuration, then apply the stricter structural checks
    ///
    /// On top of [`Self::validate_config`] this rejects empty environment,
    /// machine, installer and server names, recipes without type or content,
    /// malformed server ports and malformed protocols. Configurations that
    /// only need to be admissible should use [`Self::validate_config`].
    pub fn validate_config_strict(config: &WorkspaceConfig) -> Result<(), ValidationError> {
        CHECKS
            .iter()
            .chain(STRICT_CHECKS)
            .try_for_each(|check| (check.run)(config))
    }

    /// Validate a standalone attribute map
    ///
    /// Fails on the first key, in iteration order, that is null, empty or
    /// starts with the reserved `codenvy` prefix. An empty map is valid.
    pub fn validate_attributes<'a, K, V, I>(attributes: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: AttributeKey + ?Sized + 'a,
        V: ?Sized + 'a,
    {
        attributes::validate_attributes(attributes)
    }

    /// Names of the checks run by [`Self::validate_config`], in order
    pub fn check_names() -> impl Iterator<Item = &'static str> {
        CHECKS.iter().map(|check| check.name)
    }

    /// Names of the checks run by [`Self::validate_config_strict`], in order
    pub fn strict_check_names() -> impl Iterator<Item = &'static str> {
        CHECKS.iter().chain(STRICT_CHECKS).map(|check| check.name)
    }
}
