//! Domain layer for workspace configuration validation
//!
//! Contains the workspace configuration document model, value objects for
//! the naming rules, the validation error type and the stateless
//! [`ConfigValidator`]. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use errors::{INVALID_WORKSPACE_NAME_MESSAGE, ValidationError};
pub use validation::ConfigValidator;
pub use value_objects::*;
