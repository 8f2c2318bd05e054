// demos/marketplace_app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Upper bound on a single ranking-oracle call. Recommendations are
  /// best-effort, so this stays short.
  pub oracle_timeout: Duration,

  // Optional: for seeding the catalog with demo listings on startup
  pub seed_catalog: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let oracle_timeout_ms = get_env("ORACLE_TIMEOUT_MS")
      .unwrap_or_else(|_| "4000".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid ORACLE_TIMEOUT_MS: {}", e)))?;

    let seed_catalog = get_env("SEED_CATALOG")
      .unwrap_or_else(|_| "true".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      oracle_timeout: Duration::from_millis(oracle_timeout_ms),
      seed_catalog,
    })
  }
}
