//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod config_source;

pub use config_source::ConfigSourcePort;
#[cfg(test)]
pub use config_source::MockConfigSourcePort;
