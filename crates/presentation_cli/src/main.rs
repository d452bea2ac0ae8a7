//! wsconfig CLI
//!
//! Command-line interface for validating workspace configuration documents.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use application::{ConfigValidationService, ReportStatus, ValidationReport};
use clap::{Parser, Subcommand, ValueEnum};
use domain::ConfigValidator;
use infrastructure::{AppConfig, DocumentFormat, FileConfigSource, init_logging};
use tracing::debug;

/// wsconfig CLI
#[derive(Parser)]
#[command(name = "wsconfig-cli")]
#[command(author, version, about = "Workspace configuration validator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Settings file (default: wsconfig.toml in the working directory, if present)
    #[arg(short, long, env = "WSCONFIG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate workspace configuration documents
    ///
    /// Exits with status 1 if any document fails to load or validate.
    /// Example: wsconfig-cli validate workspace.json other.yaml
    Validate {
        /// Documents to validate (.json, .yaml, .yml or .toml)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Parse every document with this format, ignoring extensions
        #[arg(short, long)]
        input_format: Option<DocumentFormat>,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Also reject empty names, incomplete recipes and malformed ports or protocols
        #[arg(long)]
        strict: bool,
    },

    /// Validate a standalone attribute map
    ///
    /// Example: wsconfig-cli check-attributes owner=team memoryLimitBytes=1000000
    CheckAttributes {
        /// Attributes as KEY=VALUE pairs
        #[arg(required = true, value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,
    },

    /// List the validation checks in the order they run
    Checks {
        /// Include the checks added by `validate --strict`
        #[arg(long)]
        strict: bool,
    },
}

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per document
    Text,
    /// JSON array of reports
    Json,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Split a `KEY=VALUE` argument; the key may be empty so the validator can report it
fn parse_attribute(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))
}

/// Render reports as text, one line per document
fn render_text(reports: &[ValidationReport]) -> String {
    reports
        .iter()
        .map(|report| match &report.status {
            ReportStatus::Valid => format!("✅ {}: valid", report.location),
            ReportStatus::Invalid { message } => format!("❌ {}: {message}", report.location),
            ReportStatus::LoadFailed { message } => format!("⚠️  {}: {message}", report.location),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let settings = AppConfig::load(cli.config.as_deref())?;
    init_logging(&settings.logging, log_filter_from_verbosity(cli.verbose))?;
    debug!(?settings, "Settings loaded");

    let mut source = FileConfigSource::new(&settings.documents);

    match cli.command {
        Commands::Validate {
            paths,
            input_format,
            output,
            strict,
        } => {
            if let Some(format) = input_format {
                source = source.with_forced_format(format);
            }
            let service = ConfigValidationService::new(Arc::new(source)).with_strict(strict);

            let locations: Vec<String> = paths
                .iter()
                .map(|path| path.to_string_lossy().into_owned())
                .collect();
            let reports = service.validate_documents(locations.as_slice()).await;

            match output {
                OutputFormat::Text => println!("{}", render_text(&reports)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
            }

            if reports.iter().all(ValidationReport::is_valid) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        },

        Commands::CheckAttributes { attributes } => {
            let service = ConfigValidationService::new(Arc::new(source));

            match service.validate_attributes(&attributes) {
                Ok(()) => {
                    println!("✅ {} attribute(s) valid", attributes.len());
                    Ok(ExitCode::SUCCESS)
                },
                Err(e) => {
                    println!("❌ {e}");
                    Ok(ExitCode::FAILURE)
                },
            }
        },

        Commands::Checks { strict } => {
            let names: Vec<&str> = if strict {
                ConfigValidator::strict_check_names().collect()
            } else {
                ConfigValidator::check_names().collect()
            };
            for (position, name) in names.iter().enumerate() {
                println!("{}. {name}", position + 1);
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero_uses_settings() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn parse_attribute_splits_on_first_equals() {
        assert_eq!(
            parse_attribute("cmd=a=b").unwrap(),
            ("cmd".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn parse_attribute_keeps_empty_key() {
        assert_eq!(
            parse_attribute("=value").unwrap(),
            (String::new(), "value".to_string())
        );
    }

    #[test]
    fn parse_attribute_requires_equals() {
        assert!(parse_attribute("novalue").is_err());
    }

    #[test]
    fn render_text_one_line_per_report() {
        let reports = vec![
            ValidationReport {
                location: "a.json".to_string(),
                workspace: Some("ws-name".to_string()),
                status: ReportStatus::Valid,
            },
            ValidationReport {
                location: "b.json".to_string(),
                workspace: None,
                status: ReportStatus::Invalid {
                    message: "Workspace name required".to_string(),
                },
            },
        ];
        let text = render_text(&reports);
        assert_eq!(
            text,
            "✅ a.json: valid\n❌ b.json: Workspace name required"
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
