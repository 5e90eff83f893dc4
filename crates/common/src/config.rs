//! Application configuration.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Relation storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Database configuration (required for the postgres backend).
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    /// Relationship graph policy.
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Which relation store backs the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on restart.
    #[default]
    Memory,
    /// `PostgreSQL` through sea-orm.
    Postgres,
}

/// Relation storage configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Selected backend.
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Relationship graph policy.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GraphConfig {
    /// Reject operations naming identifiers that were never registered
    /// through `create-user`, instead of treating them as empty users.
    #[serde(default)]
    pub require_registered_users: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_max_connections() -> u32 {
    20
}

const fn default_min_connections() -> u32 {
    2
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` (if present, exported into the process environment)
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `SOCIALGRAPH_ENV`)
    /// 4. Environment variables with `SOCIALGRAPH__` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("SOCIALGRAPH_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SOCIALGRAPH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Database settings, required when the postgres backend is selected.
    pub fn database(&self) -> Result<&DatabaseConfig, config::ConfigError> {
        self.database.as_ref().ok_or_else(|| {
            config::ConfigError::NotFound(
                "database section is required for the postgres backend".to_string(),
            )
        })
    }
}
