//! Log subscriber initialization

use application::ApplicationError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Install the global tracing subscriber
///
/// `filter_override` replaces the configured filter when given (the CLI
/// passes its verbosity-derived level here). Logs go to stderr so that
/// command output on stdout stays machine-readable.
pub fn init_logging(
    config: &LoggingConfig,
    filter_override: Option<&str>,
) -> Result<(), ApplicationError> {
    let directives = filter_override.unwrap_or(&config.filter);
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| ApplicationError::Configuration(format!("invalid log filter: {e}")))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ApplicationError::Configuration(format!("logging already initialized: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "wsconfig=verbose".to_string(),
            ..LoggingConfig::default()
        };
        let err = init_logging(&config, None).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn second_initialization_fails_cleanly() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config, Some("warn"));
        assert!(init_logging(&config, Some("warn")).is_err());
    }
}
