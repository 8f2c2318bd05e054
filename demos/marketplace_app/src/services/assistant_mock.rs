// demos/marketplace_app/src/services/assistant_mock.rs

//! Stand-in for the storefront chat model. Answers product questions by
//! searching the catalog with the user's message, the way the real
//! assistant grounds its replies in a product-info tool.

use async_trait::async_trait;
use std::sync::Arc;
use swapmart::{catalog, CatalogStore, ChatAssistant, ChatRequest, ProductFilter};
use tracing::{info, instrument};

pub struct MockChatAssistant {
  store: Arc<dyn CatalogStore>,
}

impl MockChatAssistant {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl ChatAssistant for MockChatAssistant {
  #[instrument(name = "mock_oracle::chat", skip(self, request), fields(history_len = request.history.len()))]
  async fn reply(&self, request: ChatRequest) -> anyhow::Result<String> {
    tokio::time::sleep(std::time::Duration::from_millis(30)).await; // Simulate network latency

    if request.message.trim().is_empty() {
      anyhow::bail!("Chat message must not be empty");
    }

    let hits = catalog::list(self.store.as_ref(), &ProductFilter::new().search(request.message.trim()));
    let reply = if hits.is_empty() {
      "I couldn't find any listings matching that. Could you describe what you're looking for differently?".to_string()
    } else {
      let lines: Vec<String> = hits
        .iter()
        .take(3)
        .map(|p| format!("- {} ({}, ${:.2})", p.title, p.category, p.price))
        .collect();
      format!("Here is what I found:\n{}", lines.join("\n"))
    };
    info!(hits = hits.len(), "Mock assistant replied.");
    Ok(reply)
  }
}
