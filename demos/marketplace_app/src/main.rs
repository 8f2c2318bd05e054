// demos/marketplace_app/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod seed;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::services::{MockChatAssistant, MockImageEnhancer, MockRankingOracle};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use std::sync::Arc;
use swapmart::{Catalog, CatalogStore, InMemoryCatalog, InMemoryCredentials, Recommender};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting marketplace application server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // The in-memory catalog store, shared by the gateway and the mock oracles.
  let store: Arc<dyn CatalogStore> = Arc::new(InMemoryCatalog::new());
  let catalog = Catalog::new(store.clone());

  // Seed demo listings if configured
  if app_config.seed_catalog {
    if let Err(e) = seed::seed_catalog(&catalog) {
      tracing::error!(error = %e, "Failed to seed catalog.");
      panic!("Seed error: {}", e);
    }
  }

  // Mock oracle services. A deployment against the real hosted models
  // swaps these for live implementations of the same capability traits.
  let recommender = Arc::new(Recommender::with_timeout(
    Arc::new(MockRankingOracle::new(store.clone())),
    app_config.oracle_timeout,
  ));
  let enhancer = Arc::new(MockImageEnhancer);
  let assistant = Arc::new(MockChatAssistant::new(store.clone()));

  // Create AppState
  let app_state = AppState {
    catalog,
    credentials: Arc::new(InMemoryCredentials::new()),
    recommender,
    enhancer,
    assistant,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
