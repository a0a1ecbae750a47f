//! Server Configuration

use serde::{Deserialize, Serialize};

/// Configuration for the API server.
///
/// Loaded from an optional `vibration.toml` next to the binary, overridden
/// by `VIBRATION_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Standard applied when the upload form omits the code field
    #[serde(default = "default_standard")]
    pub default_standard: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_standard() -> String {
    "ISO2372".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_upload_bytes: default_max_upload_bytes(),
            default_standard: default_standard(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("vibration").required(false))
            .add_source(config::Environment::with_prefix("VIBRATION"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(cfg.default_standard, "ISO2372");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg: ServerConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "bind_addr = \"127.0.0.1:9000\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000");
        assert_eq!(cfg.default_standard, "ISO2372");
    }
}
