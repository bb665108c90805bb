use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    #[default]
    Memory,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// JSON array of orders loaded into the memory backend at startup
    pub seed_file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClassificationConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 { 10 }

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { directory: default_export_directory() }
    }
}

fn default_export_directory() -> String { "exports".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_high_priority_threshold")]
    pub high_priority_threshold: f64,
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self { high_priority_threshold: default_high_priority_threshold() }
    }
}

fn default_high_priority_threshold() -> f64 { 200.0 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        // Eg.. `ORDERFLOW__SERVER__PORT=9000` sets `server.port`
        let environment = config::Environment::with_prefix("ORDERFLOW").separator("__");

        Self::layered(Path::new("config"), &run_mode, environment)
    }

    fn layered(
        dir: &Path,
        run_mode: &str,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let source = |name: &str| config::File::with_name(&dir.join(name).to_string_lossy());

        let s = config::Config::builder()
            .add_source(source("default"))
            // Per-environment overrides are optional
            .add_source(source(run_mode).required(false))
            // Local overrides, never checked in
            .add_source(source("local").required(false))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }

    /// Read a single configuration file, without environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }
}
