// swapmart/src/recommend/session.rs

//! Supersession guard for overlapping recommendation fetches. The UI may
//! trigger a new fetch while a previous one is still awaiting the oracle;
//! only the most recently initiated fetch's result is authoritative for
//! display. Stale fetches are not hard-cancelled, their results are
//! simply refused on arrival (cancellation-by-ignoring).
//!
//! Each fetch runs the per-request machine
//! `Idle -> AwaitingOracle -> {Resolved | Failed}` to completion; there
//! is no retry loop, every UI trigger is a fresh instance.

use crate::catalog::product::Product;

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Identifies one fetch. Obtained from [`RecommendationSession::begin`]
/// and presented back with the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
  generation: u64,
}

#[derive(Debug, Default)]
pub struct RecommendationSession {
  latest: AtomicU64,
}

impl RecommendationSession {
  pub fn new() -> Self {
    Self::default()
  }

  /// Starts a new fetch, superseding every fetch started earlier.
  pub fn begin(&self) -> FetchTicket {
    let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
    FetchTicket { generation }
  }

  /// Whether `ticket` still belongs to the most recently started fetch.
  pub fn is_current(&self, ticket: &FetchTicket) -> bool {
    self.latest.load(Ordering::SeqCst) == ticket.generation
  }

  /// Accepts a completed fetch's result if its ticket is still current,
  /// otherwise discards it.
  pub fn accept(&self, ticket: &FetchTicket, result: Vec<Product>) -> Option<Vec<Product>> {
    if self.is_current(ticket) {
      Some(result)
    } else {
      debug!(generation = ticket.generation, "Discarding superseded recommendation result.");
      None
    }
  }
}
