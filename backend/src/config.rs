//! Service configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `KERBSIDE_`-prefixed environment variables,
//! and defaults, so `--store-connection-uri` and
//! `KERBSIDE_STORE_CONNECTION_URI` name the same option.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_STORE_URI: &str = "mongodb://localhost:27017";
const DEFAULT_STORE_DATABASE: &str = "kerbside";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Configuration values for the service process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "KERBSIDE")]
pub struct ServiceSettings {
    /// Document store endpoint.
    pub store_connection_uri: Option<String>,
    /// Database holding the service collections.
    pub store_database: Option<String>,
    /// Socket address the HTTP listener binds to.
    pub bind_addr: Option<String>,
    /// Serve from the in-memory adapter instead of a document store.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl ServiceSettings {
    /// Return the configured store endpoint, falling back to the default.
    pub fn store_connection_uri(&self) -> &str {
        self.store_connection_uri
            .as_deref()
            .unwrap_or(DEFAULT_STORE_URI)
    }

    /// Return the configured database name, falling back to the default.
    pub fn store_database(&self) -> &str {
        self.store_database
            .as_deref()
            .unwrap_or(DEFAULT_STORE_DATABASE)
    }

    /// Parse the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    fn load_from_args<const N: usize>(args: [&str; N]) -> ServiceSettings {
        ServiceSettings::load_from_iter(args.map(OsString::from)).expect("config should load")
    }

    #[test]
    fn default_values_are_used_when_missing() {
        let settings = load_from_args(["kerbside"]);
        assert_eq!(settings.store_connection_uri(), DEFAULT_STORE_URI);
        assert_eq!(settings.store_database(), DEFAULT_STORE_DATABASE);
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:3000".parse::<SocketAddr>().expect("literal parses")
        );
        assert!(!settings.in_memory);
    }

    #[test]
    fn cli_flags_override_defaults() {
        let settings = load_from_args([
            "kerbside",
            "--store-connection-uri",
            "mongodb://db.internal:27017",
            "--store-database",
            "staging",
            "--bind-addr",
            "127.0.0.1:8080",
        ]);
        assert_eq!(
            settings.store_connection_uri(),
            "mongodb://db.internal:27017"
        );
        assert_eq!(settings.store_database(), "staging");
        assert_eq!(
            settings.bind_addr().expect("flag parses"),
            "127.0.0.1:8080".parse::<SocketAddr>().expect("literal parses")
        );
    }

    #[test]
    fn malformed_bind_addr_surfaces_as_an_error() {
        let settings = load_from_args(["kerbside", "--bind-addr", "not-an-addr"]);
        assert!(settings.bind_addr().is_err());
    }
}
