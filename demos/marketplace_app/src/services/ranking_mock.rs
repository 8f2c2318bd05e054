// demos/marketplace_app/src/services/ranking_mock.rs

//! Stand-in for the hosted ranking model. Suggests listings sharing a
//! category with the browsed ones, newest first, and deliberately keeps
//! the untrusted-oracle shape: string ids, simulated latency, and a
//! failure hook for exercising the degrade-to-empty path.

use async_trait::async_trait;
use std::sync::Arc;
use swapmart::{CatalogStore, RankingOracle, RankingRequest, RankingResponse};
use tracing::{info, instrument};
use uuid::Uuid;

pub struct MockRankingOracle {
  store: Arc<dyn CatalogStore>,
}

impl MockRankingOracle {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self { store }
  }
}

#[async_trait]
impl RankingOracle for MockRankingOracle {
  #[instrument(name = "mock_oracle::rank", skip(self, request), fields(user_id = %request.user_id, signal_len = request.browsing_history.len()))]
  async fn rank(&self, request: RankingRequest) -> anyhow::Result<RankingResponse> {
    tokio::time::sleep(std::time::Duration::from_millis(50)).await; // Simulate network latency

    // Failure hook, mirroring how the mail/payment mocks let tests and
    // demos trip the error path on demand.
    if request.user_id == "fail_test" {
      anyhow::bail!("Simulated ranking model outage");
    }

    let browsed: Vec<Uuid> = request
      .browsing_history
      .iter()
      .filter_map(|raw| Uuid::parse_str(raw).ok())
      .collect();

    let products = self.store.all();
    let browsed_categories: Vec<_> = products
      .iter()
      .filter(|p| browsed.contains(&p.id))
      .map(|p| p.category)
      .collect();

    let mut candidates: Vec<_> = products
      .iter()
      .filter(|p| browsed_categories.contains(&p.category) && !browsed.contains(&p.id))
      .collect();
    candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let product_ids: Vec<String> = candidates.iter().take(4).map(|p| p.id.to_string()).collect();
    info!(suggested = product_ids.len(), "Mock ranking produced suggestions.");
    Ok(RankingResponse { product_ids })
  }
}
