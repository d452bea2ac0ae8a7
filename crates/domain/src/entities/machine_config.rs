//! Machine and server configuration entities

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Attributes;

/// A server exposed by a machine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port, optionally suffixed with `/tcp` or `/udp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Protocol spoken on the port (e.g. `http`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl ServerConfig {
    /// Create a server on the given port
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: Some(port.into()),
            protocol: None,
        }
    }

    /// Set the protocol
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }
}

/// A machine within an environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Installer identifiers
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub installers: Vec<String>,
    /// Servers keyed by reference
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub servers: IndexMap<String, ServerConfig>,
    /// Free-form machine attributes
    #[serde(
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub attributes: Attributes,
}

impl MachineConfig {
    /// Create an empty machine
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an installer
    #[must_use]
    pub fn with_installer(mut self, installer: impl Into<String>) -> Self {
        self.installers.push(installer.into());
        self
    }

    /// Add a server under a reference
    #[must_use]
    pub fn with_server(mut self, reference: impl Into<String>, server: ServerConfig) -> Self {
        self.servers.insert(reference.into(), server);
        self
    }

    /// Add a machine attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(Some(key.into()), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_parts() {
        let machine = MachineConfig::new()
            .with_installer("org.eclipse.che.ws-agent")
            .with_server("ref1", ServerConfig::new("8080/tcp").with_protocol("https"))
            .with_attribute("memoryLimitBytes", "1000000");

        assert_eq!(machine.installers, ["org.eclipse.che.ws-agent"]);
        assert_eq!(machine.servers["ref1"].port.as_deref(), Some("8080/tcp"));
        assert_eq!(machine.servers["ref1"].protocol.as_deref(), Some("https"));
        assert_eq!(machine.attributes.len(), 1);
    }

    #[test]
    fn null_machine_collections_deserialize_as_empty() {
        let machine: MachineConfig = serde_json::from_str(
            r#"{"installers": null, "servers": null, "attributes": null}"#,
        )
        .unwrap();
        assert_eq!(machine, MachineConfig::new());
    }

    #[test]
    fn server_without_port_deserializes() {
        let server: ServerConfig = serde_json::from_str(r#"{"protocol": "http"}"#).unwrap();
        assert!(server.port.is_none());
    }
}
