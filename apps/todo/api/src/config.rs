use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::RetryConfig;
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    /// Startup readiness policy for the store
    pub retry: RetryConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if DATABASE_URL is not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=3001
        let retry = RetryConfig::from_env()?; // Uses defaults: 20 attempts, 1500ms apart

        Ok(Self {
            app: app_info!(),
            database,
            server,
            retry,
            environment,
        })
    }
}
