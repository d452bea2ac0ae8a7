//! Config Validation Service - Admits workspace configurations before provisioning

use std::fmt;
use std::sync::Arc;

use domain::{ConfigValidator, WorkspaceConfig};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::ConfigSourcePort};

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportStatus {
    /// The document passed every check
    Valid,
    /// The document was loaded but violates an invariant
    Invalid { message: String },
    /// The document could not be loaded
    LoadFailed { message: String },
}

/// Validation result for a single document location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Document location as given by the caller
    pub location: String,
    /// Workspace name, when the document could be loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    /// Outcome
    #[serde(flatten)]
    pub status: ReportStatus,
}

impl ValidationReport {
    /// Check if the document passed validation
    pub const fn is_valid(&self) -> bool {
        matches!(self.status, ReportStatus::Valid)
    }

    /// Error message, if the document was rejected
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            ReportStatus::Valid => None,
            ReportStatus::Invalid { message } | ReportStatus::LoadFailed { message } => {
                Some(message.as_str())
            },
        }
    }
}

/// Service that loads workspace configurations and admits only valid ones
pub struct ConfigValidationService {
    source: Arc<dyn ConfigSourcePort>,
    strict: bool,
}

impl fmt::Debug for ConfigValidationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigValidationService")
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl ConfigValidationService {
    /// Create a new validation service
    pub fn new(source: Arc<dyn ConfigSourcePort>) -> Self {
        Self {
            source,
            strict: false,
        }
    }

    /// Also apply the strict structural checks when validating
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate an in-memory configuration
    #[instrument(skip_all, fields(workspace = config.name_or_empty(), strict = self.strict))]
    pub fn validate(&self, config: &WorkspaceConfig) -> Result<(), ApplicationError> {
        let result = if self.strict {
            ConfigValidator::validate_config_strict(config)
        } else {
            ConfigValidator::validate_config(config)
        };

        match result {
            Ok(()) => {
                debug!(
                    environments = config.environment_count(),
                    commands = config.commands.len(),
                    "Workspace configuration is valid"
                );
                Ok(())
            },
            Err(e) => {
                warn!(error = %e, "Workspace configuration rejected");
                Err(e.into())
            },
        }
    }

    /// Validate a standalone attribute map given as key/value pairs
    #[instrument(skip_all, fields(count = attributes.len()))]
    pub fn validate_attributes(&self, attributes: &[(String, String)]) -> Result<(), ApplicationError> {
        ConfigValidator::validate_attributes(attributes.iter().map(|(key, value)| (key, value)))
            .inspect_err(|e| warn!(error = %e, "Attributes rejected"))
            .map_err(ApplicationError::from)
    }

    /// Load the document at `location` and return it only if it is valid
    #[instrument(skip(self))]
    pub async fn accept(&self, location: &str) -> Result<WorkspaceConfig, ApplicationError> {
        let config = self.source.load(location).await?;
        debug!("Document loaded");

        self.validate(&config)?;

        info!(workspace = config.name_or_empty(), "Workspace configuration accepted");
        Ok(config)
    }

    /// Validate several documents, one report per location, in input order
    pub async fn validate_documents<S: AsRef<str>>(&self, locations: &[S]) -> Vec<ValidationReport> {
        let mut reports = Vec::with_capacity(locations.len());

        for location in locations {
            reports.push(self.report(location.as_ref()).await);
        }

        reports
    }

    async fn report(&self, location: &str) -> ValidationReport {
        let config = match self.source.load(location).await {
            Ok(config) => config,
            Err(e) => {
                warn!(location, error = %e, "Failed to load workspace configuration");
                return ValidationReport {
                    location: location.to_string(),
                    workspace: None,
                    status: ReportStatus::LoadFailed {
                        message: e.to_string(),
                    },
                };
            },
        };

        let status = match self.validate(&config) {
            Ok(()) => ReportStatus::Valid,
            Err(e) => ReportStatus::Invalid {
                message: e.to_string(),
            },
        };

        ValidationReport {
            location: location.to_string(),
            workspace: config.name,
            status,
        }
    }
}
