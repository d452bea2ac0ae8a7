//! Serialization formats for workspace configuration documents

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use application::ApplicationError;
use domain::WorkspaceConfig;
use serde::{Deserialize, Serialize};

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// JSON document
    #[default]
    Json,
    /// YAML document
    Yaml,
    /// TOML document
    Toml,
}

impl DocumentFormat {
    /// Guess the format from a file extension
    ///
    /// Returns `None` for missing or unknown extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Deserialize a workspace configuration from document text
    ///
    /// The returned configuration has not been validated.
    pub fn parse(self, content: &str) -> Result<WorkspaceConfig, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(ApplicationError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "
name: ws-name
defaultEnv: dev-env
environments:
  dev-env:
    recipe:
      type: dockerimage
      content: eclipse/ubuntu_jdk8
    machines:
      dev-machine:
        installers: [org.eclipse.che.ws-agent]
        servers:
          tomcat:
            port: 8080/tcp
            protocol: http
commands:
  - name: build
    type: mvn
    commandLine: mvn clean install
";

    const TOML: &str = r#"
name = "ws-name"
defaultEnv = "dev-env"

[environments.dev-env.recipe]
type = "dockerimage"
content = "eclipse/ubuntu_jdk8"

[[commands]]
name = "build"
commandLine = "mvn clean install"
"#;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("ws.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("ws.YML")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dir/ws.toml")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("ws.txt")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("ws")), None);
    }

    #[test]
    fn format_from_str() {
        assert_eq!("JSON".parse::<DocumentFormat>().unwrap(), DocumentFormat::Json);
        assert_eq!("yml".parse::<DocumentFormat>().unwrap(), DocumentFormat::Yaml);
        assert!(matches!(
            "xml".parse::<DocumentFormat>(),
            Err(ApplicationError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn format_display() {
        assert_eq!(DocumentFormat::Toml.to_string(), "toml");
    }

    #[test]
    fn parses_yaml_document() {
        let config = DocumentFormat::Yaml.parse(YAML).unwrap();
        let env = config.default_environment().unwrap();
        let server = &env.machines["dev-machine"].servers["tomcat"];
        assert_eq!(server.port.as_deref(), Some("8080/tcp"));
        assert_eq!(config.commands[0].command_type.as_deref(), Some("mvn"));
    }

    #[test]
    fn parses_toml_document() {
        let config = DocumentFormat::Toml.parse(TOML).unwrap();
        assert_eq!(config.name.as_deref(), Some("ws-name"));
        assert!(config.default_environment().is_some());
        assert_eq!(
            config.commands[0].command_line.as_deref(),
            Some("mvn clean install")
        );
    }

    #[test]
    fn yaml_nulls_reach_the_validator() {
        let yaml = "
name: ws-name
defaultEnv: dev-env
attributes:
  ~: value1
environments:
  dev-env:
    recipe:
      type: dockerimage
      content: ubuntu
    machines: ~
commands: ~
";
        let config = DocumentFormat::Yaml.parse(yaml).unwrap();
        assert!(config.commands.is_empty());

        let err = domain::ConfigValidator::validate_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "Attribute name 'null' is not valid");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DocumentFormat::Json.parse("{\"name\": ").is_err());
    }
}
