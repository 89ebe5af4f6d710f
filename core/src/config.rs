use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Conventional variable holding the Gemini credential.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Layers `<dir>/default`, `<dir>/<RUN_MODE>`, `IDEAGRAPH__*` variables and
    /// finally `GEMINI_API_KEY`.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(
                File::with_name(&dir.join(&run_mode).to_string_lossy()).required(false),
            )
            .add_source(
                Environment::with_prefix("IDEAGRAPH")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", env::var(GEMINI_API_KEY_VAR).ok())?;

        builder.build()?.try_deserialize()
    }
}

fn default_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1/models".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_applies_section_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[server]\nhost = \"127.0.0.1\"\nport = 3001\n",
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.gemini.model, "gemini-2.5-flash-lite");
        assert_eq!(config.gemini.timeout_secs, 60);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_from_reads_gemini_section() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            concat!(
                "[server]\nhost = \"0.0.0.0\"\nport = 8080\n",
                "cors_origins = [\"https://app.example.com\"]\n",
                "[gemini]\nmodel = \"gemini-test\"\ntimeout_secs = 5\n",
                "[logging]\nlevel = \"debug\"\njson = true\n",
            ),
        )
        .unwrap();

        let config = AppConfig::load_from(dir.path()).unwrap();
        assert_eq!(config.server.cors_origins, vec!["https://app.example.com"]);
        assert_eq!(config.gemini.model, "gemini-test");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_missing_default_file_fails() {
        let dir = tempdir().unwrap();
        assert!(AppConfig::load_from(dir.path()).is_err());
    }
}
