//! Application layer - Use cases and orchestration
//!
//! Loads workspace configuration documents through ports and admits only
//! those that pass domain validation. Infrastructure adapters implement the
//! ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
