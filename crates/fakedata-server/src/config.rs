//! Server configuration
//!
//! This module handles hierarchical configuration loading from multiple sources:
//! - Default configuration file
//! - Environment-specific configuration file
//! - Environment variables
//! - Command-line arguments

use config::{Config, ConfigError, Environment, File};
use fakedata_api::{jwt::DEFAULT_SECRET, CorsConfig, JwtConfig, MiddlewareConfig, RouteConfig};
use fakedata_store::{
    generator::{DEFAULT_ALBUMS_PER_USER, DEFAULT_PHOTOS_PER_ALBUM, DEFAULT_USERS},
    GeneratorConfig, HashingConfig,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::telemetry::TelemetryConfig;

/// Server configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Server settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// CORS settings
    #[serde(default)]
    pub cors: CorsConfig,

    /// Token signing settings
    #[serde(default)]
    pub auth: AuthConfig,

    /// Generated dataset size
    #[serde(default)]
    pub data: DataConfig,

    /// GraphQL endpoint settings
    #[serde(default)]
    pub graphql: GraphQLConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable graceful shutdown
    #[serde(default = "default_true")]
    pub graceful_shutdown: bool,

    /// Enable response compression
    #[serde(default = "default_true")]
    pub compression: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graceful_shutdown: default_true(),
            compression: default_true(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Use JSON formatting
    #[serde(default)]
    pub json_format: bool,

    /// Include thread IDs
    #[serde(default)]
    pub include_thread_ids: bool,

    /// Include target module
    #[serde(default = "default_true")]
    pub include_target: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
            include_thread_ids: false,
            include_target: true,
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Signing secret
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_expiration")]
    pub expiration_seconds: i64,

    /// Token issuer
    #[serde(default = "default_token_party")]
    pub issuer: String,

    /// Token audience
    #[serde(default = "default_token_party")]
    pub audience: String,
}

fn default_jwt_secret() -> String {
    DEFAULT_SECRET.to_string()
}

fn default_expiration() -> i64 {
    3600
}

fn default_token_party() -> String {
    "fakedata-api".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            expiration_seconds: default_expiration(),
            issuer: default_token_party(),
            audience: default_token_party(),
        }
    }
}

/// Dataset generation parameters
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_users")]
    pub users: usize,

    #[serde(default = "default_albums_per_user")]
    pub albums_per_user: usize,

    #[serde(default = "default_photos_per_album")]
    pub photos_per_album: usize,

    /// Hash generated passwords with argon2's recommended cost instead of
    /// the cheap demo parameters
    #[serde(default)]
    pub strong_hashing: bool,
}

fn default_users() -> usize {
    DEFAULT_USERS
}

fn default_albums_per_user() -> usize {
    DEFAULT_ALBUMS_PER_USER
}

fn default_photos_per_album() -> usize {
    DEFAULT_PHOTOS_PER_ALBUM
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            albums_per_user: default_albums_per_user(),
            photos_per_album: default_photos_per_album(),
            strong_hashing: false,
        }
    }
}

/// GraphQL configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLConfig {
    /// Endpoint path
    #[serde(default = "default_graphql_path")]
    pub path: String,

    /// Serve GraphiQL on GET
    #[serde(default = "default_true")]
    pub playground: bool,
}

fn default_graphql_path() -> String {
    "/graphql".to_string()
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            path: default_graphql_path(),
            playground: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from files and environment
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default configuration file (config/default.toml)
    /// 2. Environment-specific file (config/{env}.toml)
    /// 3. Environment variables (FAKEDATA__*)
    ///
    /// Missing files are skipped; a file that exists but does not parse is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load(config_dir: impl Into<PathBuf>, environment: &str) -> Result<Self, ConfigError> {
        let config_dir = config_dir.into();

        let config = Config::builder()
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", environment))).required(false),
            )
            // e.g., FAKEDATA__SERVER__PORT=8080
            .add_source(
                Environment::with_prefix("FAKEDATA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn telemetry_config(&self) -> TelemetryConfig {
        TelemetryConfig::new()
            .with_log_level(self.logging.level.clone())
            .with_json_format(self.logging.json_format)
            .with_thread_ids(self.logging.include_thread_ids)
            .with_target(self.logging.include_target)
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        let hashing = if self.data.strong_hashing {
            HashingConfig::recommended()
        } else {
            HashingConfig::default()
        };

        GeneratorConfig::new(
            self.data.users,
            self.data.albums_per_user,
            self.data.photos_per_album,
        )
        .with_hashing(hashing)
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::new(self.auth.jwt_secret.clone())
            .with_expiration(self.auth.expiration_seconds)
            .with_issuer(self.auth.issuer.clone())
            .with_audience(self.auth.audience.clone())
    }

    pub fn route_config(&self) -> RouteConfig {
        RouteConfig::new()
            .with_graphql_path(self.graphql.path.clone())
            .with_playground(self.graphql.playground)
    }

    pub fn middleware_config(&self) -> MiddlewareConfig {
        MiddlewareConfig::new()
            .with_cors(self.cors.clone())
            .with_compression(self.server.compression)
    }
}
