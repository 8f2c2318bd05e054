// demos/marketplace_app/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use swapmart::{Catalog, ChatAssistant, CredentialStore, ImageEnhancer, Recommender};

#[derive(Clone)]
pub struct AppState {
  pub catalog: Catalog,
  pub credentials: Arc<dyn CredentialStore>,
  pub recommender: Arc<Recommender>,
  pub enhancer: Arc<dyn ImageEnhancer>,
  pub assistant: Arc<dyn ChatAssistant>,
  pub config: Arc<AppConfig>, // Share loaded config
}
