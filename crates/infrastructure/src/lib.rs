//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: reading workspace
//! configuration documents from disk, loading application settings and
//! initializing logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DocumentsConfig, LogFormat, LoggingConfig};
pub use telemetry::init_logging;
