//! File-backed workspace configuration source

use std::path::Path;

use application::{ApplicationError, ConfigSourcePort};
use async_trait::async_trait;
use domain::WorkspaceConfig;
use tracing::{debug, instrument};

use super::DocumentFormat;
use crate::config::DocumentsConfig;

/// Reads workspace configuration documents from the local filesystem
///
/// The format is taken from the file extension; files without a known
/// extension are parsed with the configured default format.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    default_format: DocumentFormat,
    forced_format: Option<DocumentFormat>,
    max_bytes: u64,
}

impl FileConfigSource {
    /// Create a source from document settings
    pub fn new(config: &DocumentsConfig) -> Self {
        Self {
            default_format: config.default_format,
            forced_format: None,
            max_bytes: config.max_bytes,
        }
    }

    /// Parse every document with `format`, ignoring extensions
    #[must_use]
    pub const fn with_forced_format(mut self, format: DocumentFormat) -> Self {
        self.forced_format = Some(format);
        self
    }

    fn format_for(&self, path: &Path) -> DocumentFormat {
        self.forced_format
            .or_else(|| DocumentFormat::from_path(path))
            .unwrap_or(self.default_format)
    }
}

#[async_trait]
impl ConfigSourcePort for FileConfigSource {
    #[instrument(skip(self))]
    async fn load(&self, location: &str) -> Result<WorkspaceConfig, ApplicationError> {
        let path = Path::new(location);

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| ApplicationError::load_failed(location, e))?;
        if metadata.len() > self.max_bytes {
            return Err(ApplicationError::DocumentTooLarge {
                location: location.to_string(),
                size: metadata.len(),
                limit: self.max_bytes,
            });
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ApplicationError::load_failed(location, e))?;

        let format = self.format_for(path);
        debug!(%format, bytes = content.len(), "Parsing workspace document");

        format
            .parse(&content)
            .map_err(|reason| ApplicationError::load_failed(location, reason))
    }
}
