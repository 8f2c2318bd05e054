// swapmart/src/oracle/ranking.rs

//! The ranking oracle: turns a browsing-history signal into an ordered
//! list of candidate product ids. Best-effort only; the Recommender
//! absorbs every failure and the oracle is free to return ids that no
//! longer exist (they are dropped during resolution).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRequest {
  /// Opaque user identity, forwarded verbatim.
  pub user_id: String,
  /// Most-recent product ids, oldest first. Ids travel as strings: the
  /// oracle is a generative model, not a database, and its output is not
  /// guaranteed to be well-formed.
  pub browsing_history: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
  /// Ranked candidate product ids. May reference products that no longer
  /// exist, or not parse as ids at all.
  pub product_ids: Vec<String>,
}

#[async_trait]
pub trait RankingOracle: Send + Sync {
  async fn rank(&self, request: RankingRequest) -> anyhow::Result<RankingResponse>;
}
