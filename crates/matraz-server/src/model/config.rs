//! Configuration management
//!
//! Settings are loaded from `conf/application.yml`, overridden by
//! `MATRAZ_`-prefixed environment variables, and finally by CLI flags.

use std::time::Duration;

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use matraz_auth::model::{DEFAULT_REFRESH_EXPIRE_SECONDS, DEFAULT_TOKEN_EXPIRE_SECONDS};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 3001;
const DEFAULT_WEBHOOK_TIMEOUT_SECONDS: u64 = 30;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(short = 'a', long = "address")]
    address: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(long = "webhook-url", env = "CHATBOT_WEBHOOK_URL")]
    webhook_url: Option<String>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    /// Load configuration for the server binary. Parses CLI arguments.
    pub fn new() -> Self {
        Self::from_cli(Cli::parse())
    }

    fn from_cli(args: Cli) -> Self {
        let mut config_builder = Config::builder()
            .add_source(config::File::with_name("conf/application").required(false))
            .add_source(
                Environment::with_prefix("MATRAZ")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(v) = args.address {
            config_builder = config_builder
                .set_override("server.address", v)
                .expect("Failed to set server address override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", i64::from(v))
                .expect("Failed to set server port override");
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.webhook_url {
            config_builder = config_builder
                .set_override("chatbot.webhook.url", v)
                .expect("Failed to set chatbot webhook URL override");
        }

        let config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config }
    }

    // ========================================================================
    // Server
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .map(|p| p as u16)
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub fn token_secret_key(&self) -> String {
        self.config
            .get_string("auth.token.secretKey")
            .unwrap_or_default()
    }

    pub fn token_expire_seconds(&self) -> i64 {
        self.config
            .get_int("auth.token.expireSeconds")
            .unwrap_or(DEFAULT_TOKEN_EXPIRE_SECONDS)
    }

    pub fn refresh_expire_seconds(&self) -> i64 {
        self.config
            .get_int("auth.token.refreshExpireSeconds")
            .unwrap_or(DEFAULT_REFRESH_EXPIRE_SECONDS)
    }

    // ========================================================================
    // Chatbot
    // ========================================================================

    pub fn chatbot_webhook_url(&self) -> Option<String> {
        self.config
            .get_string("chatbot.webhook.url")
            .ok()
            .filter(|u| !u.is_empty())
    }

    pub fn chatbot_webhook_timeout(&self) -> Duration {
        let seconds = self
            .config
            .get_int("chatbot.webhook.timeoutSeconds")
            .map(|s| s.max(1) as u64)
            .unwrap_or(DEFAULT_WEBHOOK_TIMEOUT_SECONDS);

        Duration::from_secs(seconds)
    }

    // ========================================================================
    // CORS
    // ========================================================================

    /// Comma-separated allow-list; empty means reflect any origin
    pub fn cors_allowed_origins(&self) -> Vec<String> {
        self.config
            .get_string("cors.allowedOrigins")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    // ========================================================================
    // Logging
    // ========================================================================

    pub fn logs_path(&self) -> String {
        self.config
            .get_string("logs.path")
            .unwrap_or_else(|_| "logs".to_string())
    }

    // ========================================================================
    // Database
    // ========================================================================

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self
            .config
            .get_int("db.pool.maximumPoolSize")
            .unwrap_or(20) as u32;
        let min_connections = self.config.get_int("db.pool.minimumPoolSize").unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.connectionTimeout")
            .unwrap_or(30) as u64;
        let idle_timeout = self.config.get_int("db.pool.idleTimeout").unwrap_or(10) as u64;
        let max_lifetime = self.config.get_int("db.pool.maxLifetime").unwrap_or(1800) as u64;
        let sqlx_logging = self.config.get_bool("db.pool.sqlxLogging").unwrap_or(false);

        let url = self.config.get_string("db.url")?;

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            idle_timeout = idle_timeout,
            max_lifetime = max_lifetime,
            "Database connection pool configured"
        );

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let configuration = Configuration::default();
        assert_eq!(configuration.server_address(), "0.0.0.0");
        assert_eq!(configuration.server_port(), 3001);
        assert_eq!(configuration.token_expire_seconds(), 3600);
        assert_eq!(configuration.refresh_expire_seconds(), 604800);
        assert!(configuration.chatbot_webhook_url().is_none());
        assert_eq!(
            configuration.chatbot_webhook_timeout(),
            Duration::from_secs(30)
        );
        assert!(configuration.cors_allowed_origins().is_empty());
        assert_eq!(configuration.logs_path(), "logs");
        assert!(configuration.token_secret_key().is_empty());
    }

    #[test]
    fn test_cors_origin_list_parsing() {
        let config = Config::builder()
            .set_override(
                "cors.allowedOrigins",
                "https://matraz.example.com, http://localhost:5173,",
            )
            .unwrap()
            .build()
            .unwrap();
        let configuration = Configuration { config };

        let origins = configuration.cors_allowed_origins();
        assert_eq!(
            origins,
            vec![
                "https://matraz.example.com".to_string(),
                "http://localhost:5173".to_string()
            ]
        );
    }

    #[test]
    fn test_webhook_url_empty_is_none() {
        let config = Config::builder()
            .set_override("chatbot.webhook.url", "")
            .unwrap()
            .build()
            .unwrap();
        let configuration = Configuration { config };
        assert!(configuration.chatbot_webhook_url().is_none());
    }
}
