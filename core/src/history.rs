// swapmart/src/history.rs

//! Client-session browsing history: an ordered, capped list of recently
//! viewed product ids, most-recent last. Owned by the session, not by the
//! catalog store; the app persists it as an opaque blob.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of ids retained.
pub const HISTORY_CAP: usize = 10;

/// How many of the most-recent ids are used as the ranking signal.
pub const SIGNAL_WINDOW: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrowsingHistory {
  viewed: Vec<Uuid>,
}

impl BrowsingHistory {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_ids(ids: impl IntoIterator<Item = Uuid>) -> Self {
    let mut history = Self::new();
    for id in ids {
      history.record(id);
    }
    history
  }

  /// Records a product view. A re-viewed id moves to the most-recent
  /// position instead of appearing twice; once the cap is reached the
  /// oldest entry is evicted.
  pub fn record(&mut self, product_id: Uuid) {
    self.viewed.retain(|id| *id != product_id);
    self.viewed.push(product_id);
    if self.viewed.len() > HISTORY_CAP {
      self.viewed.remove(0);
    }
  }

  /// The most-recent `SIGNAL_WINDOW` ids, oldest first, used as the
  /// ranking-oracle signal.
  pub fn signal(&self) -> &[Uuid] {
    let start = self.viewed.len().saturating_sub(SIGNAL_WINDOW);
    &self.viewed[start..]
  }

  pub fn is_empty(&self) -> bool {
    self.viewed.is_empty()
  }

  pub fn len(&self) -> usize {
    self.viewed.len()
  }

  pub fn ids(&self) -> &[Uuid] {
    &self.viewed
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn re_viewing_moves_an_id_to_the_end() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let mut history = BrowsingHistory::new();
    history.record(a);
    history.record(b);
    history.record(a);
    assert_eq!(history.ids(), &[b, a]);
  }

  #[test]
  fn cap_evicts_the_oldest_entry() {
    let ids: Vec<Uuid> = (0..HISTORY_CAP + 3).map(|_| Uuid::new_v4()).collect();
    let mut history = BrowsingHistory::new();
    for id in &ids {
      history.record(*id);
    }
    assert_eq!(history.len(), HISTORY_CAP);
    assert_eq!(history.ids(), &ids[3..]);
  }

  #[test]
  fn signal_is_the_most_recent_window() {
    let ids: Vec<Uuid> = (0..8).map(|_| Uuid::new_v4()).collect();
    let history = BrowsingHistory::from_ids(ids.iter().copied());
    assert_eq!(history.signal(), &ids[8 - SIGNAL_WINDOW..]);

    let short = BrowsingHistory::from_ids(ids.iter().copied().take(2));
    assert_eq!(short.signal().len(), 2);
  }
}
