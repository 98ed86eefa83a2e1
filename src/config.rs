use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use validator::Validate;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub server: ServerSettings,
    #[serde(default)]
    #[validate(nested)]
    pub store: StoreSettings,
    #[serde(default)]
    #[validate(nested)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// Message templates layered over the built-in ones
    #[serde(default)]
    pub messages: Vec<MessageTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageTemplate {
    pub code: String,
    pub template: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerSettings {
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[validate(range(min = 1))]
    pub workers: Option<usize>,
}

/// Which cargo store backs the tracking lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StoreSettings {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    #[validate(range(min = 1))]
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    /// Upsert the sample cargo into the database on startup
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database_url: None,
            max_connections: None,
            min_connections: None,
            seed_sample_data: false,
        }
    }
}

fn default_backend() -> StoreBackend { StoreBackend::Memory }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CacheSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_cache_capacity")]
    #[validate(range(min = 1))]
    pub capacity: u64,
    #[serde(default = "default_cache_ttl")]
    #[validate(range(min = 1))]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

fn default_cache_capacity() -> u64 { 10_000 }
fn default_cache_ttl() -> u64 { 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CARGO_TRACKER)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CARGO_TRACKER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CARGO_TRACKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_database_url(settings, std::env::var("DATABASE_URL").ok())?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CARGO_TRACKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize::<Settings>()?.validated()
    }

    /// Message overrides keyed by code
    pub fn message_overrides(&self) -> HashMap<String, String> {
        self.messages
            .iter()
            .map(|m| (m.code.clone(), m.template.clone()))
            .collect()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()
            .map_err(|errors| ConfigError::Message(format!("invalid settings: {}", errors)))?;

        if self.store.backend == StoreBackend::Postgres && self.store.database_url.is_none() {
            return Err(ConfigError::Message(
                "store.database_url is required for the postgres backend".to_string(),
            ));
        }

        Ok(self)
    }
}

/// `DATABASE_URL` wins over `store.database_url` when set
fn apply_database_url(settings: Config, database_url: Option<String>) -> Result<Config, ConfigError> {
    match database_url {
        Some(url) => Config::builder()
            .add_source(settings)
            .set_override("store.database_url", url)?
            .build(),
        None => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?
            .validated()
    }

    #[test]
    fn test_defaults() {
        let settings = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(settings.store.backend, StoreBackend::Memory);
        assert!(!settings.cache.enabled);
        assert_eq!(settings.cache.ttl_secs, 60);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.messages.is_empty());
    }

    #[test]
    fn test_postgres_requires_url() {
        let err = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [store]
            backend = "postgres"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("database_url"));
    }

    #[test]
    fn test_zero_port_rejected() {
        let result = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 0
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_message_overrides() {
        let settings = from_toml(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [[messages]]
            code = "cargo.unknown_id"
            template = "No cargo with id {0}"
            "#,
        )
        .unwrap();

        let overrides = settings.message_overrides();
        assert_eq!(overrides.get("cargo.unknown_id").map(String::as_str), Some("No cargo with id {0}"));
    }

    #[test]
    fn test_database_url_overrides_file() {
        let config = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                host = "0.0.0.0"
                port = 8080

                [store]
                backend = "postgres"
                database_url = "postgres://file@localhost/cargo"
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let overridden = apply_database_url(config.clone(), Some("postgres://env@db/cargo".to_string()))
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();
        assert_eq!(overridden.store.database_url.as_deref(), Some("postgres://env@db/cargo"));

        let untouched = apply_database_url(config, None)
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();
        assert_eq!(untouched.store.database_url.as_deref(), Some("postgres://file@localhost/cargo"));
    }

    // Only test that touches the process environment
    #[test]
    fn test_load_layers_files_and_environment() {
        std::env::set_var("DATABASE_URL", "postgres://x@y/z");
        std::env::set_var("CARGO_TRACKER__SERVER__PORT", "9091");
        std::env::set_var("CARGO_TRACKER__CACHE__ENABLED", "true");

        let result = Settings::load();

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("CARGO_TRACKER__SERVER__PORT");
        std::env::remove_var("CARGO_TRACKER__CACHE__ENABLED");

        let settings = result.unwrap();
        // config/default.toml
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.store.backend, StoreBackend::Memory);
        assert_eq!(settings.message_overrides().len(), 1);
        // environment
        assert_eq!(settings.server.port, 9091);
        assert!(settings.cache.enabled);
        assert_eq!(settings.store.database_url.as_deref(), Some("postgres://x@y/z"));
    }
}
