//! Application services - Use case implementations

mod config_validation_service;

pub use config_validation_service::{ConfigValidationService, ReportStatus, ValidationReport};
