//! Configuration source port
//!
//! Defines where workspace configuration documents come from. The
//! infrastructure layer provides a file-backed adapter; tests and embedding
//! services may provide their own.

use async_trait::async_trait;
use domain::WorkspaceConfig;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for loading workspace configuration documents
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfigSourcePort: Send + Sync {
    /// Load and deserialize the document at `location`
    ///
    /// Only deserialization happens here; the returned configuration has
    /// not been validated.
    ///
    /// # Arguments
    /// * `location` - Source-specific document identifier (e.g. a file path)
    async fn load(&self, location: &str) -> Result<WorkspaceConfig, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ConfigSourcePort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ConfigSourcePort>();
    }
}
