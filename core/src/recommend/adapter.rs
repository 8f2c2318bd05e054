// swapmart/src/recommend/adapter.rs

//! Bridges a session's browsing history to live product records via the
//! ranking oracle. Strictly best-effort: every failure mode (transport
//! error, timeout, malformed ids, hallucinated ids) degrades to fewer or
//! zero recommendations, never to an error for the caller.

use crate::catalog::product::Product;
use crate::catalog::store::CatalogStore;
use crate::history::BrowsingHistory;
use crate::oracle::ranking::{RankingOracle, RankingRequest, RankingResponse};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// The oracle is a hosted generative model; a few seconds is already
/// generous for a feature the UI can live without.
pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(4);

pub struct Recommender {
  oracle: Arc<dyn RankingOracle>,
  timeout: Duration,
}

impl Recommender {
  pub fn new(oracle: Arc<dyn RankingOracle>) -> Self {
    Self {
      oracle,
      timeout: DEFAULT_ORACLE_TIMEOUT,
    }
  }

  pub fn with_timeout(oracle: Arc<dyn RankingOracle>, timeout: Duration) -> Self {
    Self { oracle, timeout }
  }

  /// Produces ranked recommendations for `user_id`.
  ///
  /// An empty browsing history short-circuits to an empty list without
  /// contacting the oracle at all. Otherwise the most-recent signal
  /// window is sent, and each id the oracle returns is resolved through
  /// the store; ids that do not parse or do not resolve are silently
  /// dropped while the oracle's ordering is preserved for the survivors.
  #[instrument(name = "recommend::recommend", skip(self, history, store), fields(user_id = %user_id, history_len = history.len()))]
  pub async fn recommend(&self, user_id: &str, history: &BrowsingHistory, store: &dyn CatalogStore) -> Vec<Product> {
    if history.is_empty() {
      debug!("No browsing history; skipping oracle call.");
      return Vec::new();
    }

    let request = RankingRequest {
      user_id: user_id.to_string(),
      browsing_history: history.signal().iter().map(Uuid::to_string).collect(),
    };

    let response = match tokio::time::timeout(self.timeout, self.oracle.rank(request)).await {
      Ok(Ok(response)) => response,
      Ok(Err(error)) => {
        warn!(error = %error, "Ranking oracle call failed; degrading to no recommendations.");
        return Vec::new();
      }
      Err(_elapsed) => {
        warn!(timeout_ms = self.timeout.as_millis() as u64, "Ranking oracle timed out; degrading to no recommendations.");
        return Vec::new();
      }
    };

    let resolved = resolve(response, store);
    info!(resolved = resolved.len(), "Recommendations resolved.");
    resolved
  }
}

fn resolve(response: RankingResponse, store: &dyn CatalogStore) -> Vec<Product> {
  response
    .product_ids
    .iter()
    .filter_map(|raw| {
      let id = match Uuid::parse_str(raw) {
        Ok(id) => id,
        Err(_) => {
          debug!(candidate = %raw, "Oracle returned a non-id candidate; dropped.");
          return None;
        }
      };
      let product = store.get_by_id(&id);
      if product.is_none() {
        debug!(candidate = %raw, "Oracle candidate no longer exists; dropped.");
      }
      product
    })
    .collect()
}
