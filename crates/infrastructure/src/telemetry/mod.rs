//! Logging infrastructure
//!
//! Sets up `tracing-subscriber` output in text or JSON form.

mod logging;

pub use logging::init_logging;
