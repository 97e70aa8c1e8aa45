//! Configuration settings for the bgdict service.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub resolver: ResolverConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    ///
    /// Environment overrides are applied on top of whatever was loaded.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("bgdict.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("bgdict/config.toml"))
                .unwrap_or_default(),
        ];

        let mut config = Config::default();
        for path in &config_paths {
            if path.is_file() {
                tracing::info!("Loading config from: {}", path.display());
                config = Self::from_file(path)?;
                break;
            }
        }

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Recognised keys: `MYSQL_USER`, `MYSQL_PASSWORD`, `MYSQL_DATABASE`,
    /// `MYSQL_HOST`, `HOSTNAME`, `PORT`. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(user) = get("MYSQL_USER") {
            self.storage.mysql.user = user;
        }
        if let Some(password) = get("MYSQL_PASSWORD") {
            self.storage.mysql.password = password;
        }
        if let Some(database) = get("MYSQL_DATABASE") {
            self.storage.mysql.database = database;
        }
        if let Some(host) = get("MYSQL_HOST") {
            self.storage.mysql.host = host;
        }
        if let Some(host) = get("HOSTNAME") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(port = %port, "Ignoring unparsable PORT override"),
            }
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.resolver.batch_concurrency == 0 {
            return Err(
                ConfigError::Invalid("resolver.batch_concurrency must be > 0".to_string()).into(),
            );
        }

        match self.storage.backend {
            StorageBackendType::Mysql => {
                if self.storage.mysql.max_connections == 0 {
                    return Err(ConfigError::Invalid(
                        "storage.mysql.max_connections must be > 0".to_string(),
                    )
                    .into());
                }
                if self.storage.mysql.database.is_empty() {
                    return Err(
                        ConfigError::MissingField("storage.mysql.database".to_string()).into(),
                    );
                }
            }
            StorageBackendType::Memory => {
                if self.storage.seed_file.is_none() {
                    return Err(ConfigError::MissingField("storage.seed_file".to_string()).into());
                }
            }
        }

        Ok(())
    }

    /// Expand the seed file path, if one is configured.
    pub fn seed_file(&self) -> Option<PathBuf> {
        self.storage
            .seed_file
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Route prefix (e.g. "/api/v1"); empty mounts at the root
    pub prefix: String,
    /// Enable permissive CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            prefix: String::new(),
            enable_cors: true,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend type: "mysql" or "memory"
    pub backend: StorageBackendType,
    /// JSON seed file for the memory backend
    pub seed_file: Option<String>,
    /// MySQL configuration
    pub mysql: MysqlConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Mysql,
            seed_file: None,
            mysql: MysqlConfig::default(),
        }
    }
}

/// Storage backend type enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackendType {
    Mysql,
    Memory,
}

/// MySQL connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Pool size
    pub max_connections: u32,
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self {
            host: "db".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "bgdict".to_string(),
            max_connections: 5,
        }
    }
}

/// Word resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// How many batch items may be in flight at once
    pub batch_concurrency: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            batch_concurrency: 4,
        }
    }
}
