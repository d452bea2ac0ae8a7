//! Property-based tests for the workspace configuration validator
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    Command, ConfigValidator, Environment, INVALID_WORKSPACE_NAME_MESSAGE, MachineConfig, Recipe,
    ServerConfig, ValidationError, WorkspaceConfig, WorkspaceName,
};
use proptest::prelude::*;

fn valid_config(name: &str) -> WorkspaceConfig {
    WorkspaceConfig::new(name)
        .with_default_env("dev-env")
        .with_environment("dev-env", Environment::new(Recipe::new("dockerimage", "ubuntu")))
        .with_command(Command::new("build", "make"))
}

// ============================================================================
// Workspace name grammar
// ============================================================================

mod workspace_name_tests {
    use super::*;

    proptest! {
        #[test]
        fn grammar_conforming_names_are_accepted(
            name in "[a-zA-Z0-9][a-zA-Z0-9_.-]{1,18}[a-zA-Z0-9]"
        ) {
            prop_assert!(WorkspaceName::is_valid(&name));
            prop_assert!(ConfigValidator::validate_config(&valid_config(&name)).is_ok());
        }

        #[test]
        fn names_with_bad_edges_are_rejected(
            edge in "[_.-]",
            body in "[a-zA-Z0-9]{2,10}",
            leading in any::<bool>()
        ) {
            let name = if leading { format!("{edge}{body}") } else { format!("{body}{edge}") };
            let err = ConfigValidator::validate_config(&valid_config(&name)).unwrap_err();
            prop_assert_eq!(err.to_string(), INVALID_WORKSPACE_NAME_MESSAGE);
        }

        #[test]
        fn overlong_names_are_rejected(name in "[a-z]{21,40}") {
            prop_assert_eq!(
                ConfigValidator::validate_config(&valid_config(&name)),
                Err(ValidationError::InvalidName)
            );
        }

        #[test]
        fn name_roundtrips_through_json(
            name in "[a-zA-Z0-9][a-zA-Z0-9_.-]{1,18}[a-zA-Z0-9]"
        ) {
            let parsed = WorkspaceName::new(&name).unwrap();
            let json = serde_json::to_string(&parsed).unwrap();
            let back: WorkspaceName = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, back);
        }
    }
}

// ============================================================================
// Attribute keys
// ============================================================================

mod attribute_tests {
    use indexmap::IndexMap;

    use super::*;

    proptest! {
        #[test]
        fn reserved_prefix_is_always_rejected(suffix in "[a-zA-Z0-9_.-]{0,12}") {
            let key = format!("codenvy{suffix}");
            let attributes = IndexMap::from([(key.clone(), "v".to_string())]);
            let err = ConfigValidator::validate_attributes(&attributes).unwrap_err();
            prop_assert_eq!(err.to_string(), format!("Attribute name '{key}' is not valid"));
        }

        #[test]
        fn ordinary_keys_are_accepted(key in "[a-bd-zA-Z][a-zA-Z0-9_.-]{0,12}") {
            let attributes = IndexMap::from([(key, "v".to_string())]);
            prop_assert!(ConfigValidator::validate_attributes(&attributes).is_ok());
        }

        #[test]
        fn whitespace_keys_are_accepted(key in "[ \t]{1,4}") {
            let attributes = IndexMap::from([(key, "v".to_string())]);
            prop_assert!(ConfigValidator::validate_attributes(&attributes).is_ok());
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

mod determinism_tests {
    use super::*;

    proptest! {
        #[test]
        fn repeated_validation_yields_same_result(
            name in "[a-zA-Z0-9_.-]{0,25}",
            drop_default_env in any::<bool>(),
            drop_command_line in any::<bool>()
        ) {
            let mut config = valid_config("placeholder");
            config.name = Some(name);
            if drop_default_env {
                config.default_env = None;
            }
            if drop_command_line {
                config.commands[0].command_line = None;
            }

            let first = ConfigValidator::validate_config(&config);
            let second = ConfigValidator::validate_config(&config);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn strict_validation_never_accepts_more(
            name in "[a-zA-Z0-9_.-]{0,25}",
            recipe_type in "[a-z]{0,3}",
            port in "[0-9a-zA-Z/]{0,6}"
        ) {
            let environment = Environment::new(Recipe::new(recipe_type, "ubuntu"))
                .with_machine("m", MachineConfig::new().with_server("web", ServerConfig::new(port)));
            let mut config = valid_config("placeholder").with_environment("dev-env", environment);
            config.name = Some(name);

            let lenient = ConfigValidator::validate_config(&config);
            let strict = ConfigValidator::validate_config_strict(&config);
            if let Err(e) = lenient {
                prop_assert_eq!(strict, Err(e));
            }
        }
    }
}
