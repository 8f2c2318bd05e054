// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use swapmart::{Category, Product, RankingOracle, RankingRequest, RankingResponse};

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;

// --- Fixture builders ---

/// A fixed base instant so ordering assertions are deterministic.
pub fn base_time() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap()
}

pub fn ts(offset_secs: i64) -> DateTime<Utc> {
  base_time() + ChronoDuration::seconds(offset_secs)
}

pub fn product(title: &str, owner_id: &str, category: Category, price: f64, created_at: DateTime<Utc>) -> Product {
  Product {
    id: Uuid::new_v4(),
    owner_id: owner_id.to_string(),
    title: title.to_string(),
    description: format!("{} description", title),
    category,
    price,
    image_url: format!("https://example.com/{}.jpg", title.to_lowercase().replace(' ', "-")),
    created_at,
  }
}

// --- Stub ranking oracles ---

/// Returns a scripted id list and counts how often it was consulted.
pub struct ScriptedOracle {
  pub product_ids: Vec<String>,
  pub calls: AtomicUsize,
}

impl ScriptedOracle {
  pub fn new(product_ids: Vec<String>) -> Self {
    Self {
      product_ids,
      calls: AtomicUsize::new(0),
    }
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl RankingOracle for ScriptedOracle {
  async fn rank(&self, _request: RankingRequest) -> anyhow::Result<RankingResponse> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(RankingResponse {
      product_ids: self.product_ids.clone(),
    })
  }
}

/// Always fails, simulating a transport or model error.
pub struct FailingOracle {
  pub calls: AtomicUsize,
}

impl FailingOracle {
  pub fn new() -> Self {
    Self {
      calls: AtomicUsize::new(0),
    }
  }
}

#[async_trait]
impl RankingOracle for FailingOracle {
  async fn rank(&self, _request: RankingRequest) -> anyhow::Result<RankingResponse> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    anyhow::bail!("simulated oracle outage")
  }
}

/// Answers after a fixed delay, for timeout tests.
pub struct SlowOracle {
  pub delay: Duration,
  pub product_ids: Vec<String>,
}

#[async_trait]
impl RankingOracle for SlowOracle {
  async fn rank(&self, _request: RankingRequest) -> anyhow::Result<RankingResponse> {
    tokio::time::sleep(self.delay).await;
    Ok(RankingResponse {
      product_ids: self.product_ids.clone(),
    })
  }
}

/// Records the request it was given, so tests can assert on the signal
/// actually sent to the oracle.
pub struct CapturingOracle {
  pub seen: parking_lot::Mutex<Vec<RankingRequest>>,
}

impl CapturingOracle {
  pub fn new() -> Self {
    Self {
      seen: parking_lot::Mutex::new(Vec::new()),
    }
  }
}

#[async_trait]
impl RankingOracle for CapturingOracle {
  async fn rank(&self, request: RankingRequest) -> anyhow::Result<RankingResponse> {
    self.seen.lock().push(request);
    Ok(RankingResponse::default())
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
