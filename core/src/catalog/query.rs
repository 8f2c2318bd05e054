// swapmart/src/catalog/query.rs

//! Read side of the catalog: filtered, newest-first views over the store.
//! Never mutates anything; every call returns a freshly built Vec.

use crate::catalog::product::{CategoryFilter, Product};
use crate::catalog::store::CatalogStore;

use tracing::{instrument, trace};

/// Composable list filter. All supplied criteria apply with AND
/// semantics; the default value matches everything.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
  /// Case-insensitive substring match against `title` only. `None` or an
  /// empty string disables text filtering.
  pub search: Option<String>,
  pub category: CategoryFilter,
  /// Restricts to one owner's products (the "my listings" view).
  pub owner_id: Option<String>,
}

impl ProductFilter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn search(mut self, text: impl Into<String>) -> Self {
    self.search = Some(text.into());
    self
  }

  pub fn category(mut self, filter: CategoryFilter) -> Self {
    self.category = filter;
    self
  }

  pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
    self.owner_id = Some(owner_id.into());
    self
  }

  fn accepts(&self, product: &Product) -> bool {
    if let Some(search) = self.search.as_deref() {
      if !search.is_empty() && !product.title.to_lowercase().contains(&search.to_lowercase()) {
        return false;
      }
    }
    if !self.category.matches(product.category) {
      return false;
    }
    if let Some(owner_id) = self.owner_id.as_deref() {
      if product.owner_id != owner_id {
        return false;
      }
    }
    true
  }
}

/// Returns the matching products sorted by `created_at` descending.
/// The sort is stable, so records sharing a timestamp keep their
/// insertion order.
#[instrument(name = "query::list", skip(store, filter), fields(store_len = store.len()))]
pub fn list(store: &dyn CatalogStore, filter: &ProductFilter) -> Vec<Product> {
  let mut matched: Vec<Product> = store.all().into_iter().filter(|p| filter.accepts(p)).collect();
  matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  trace!(matched = matched.len(), "List query evaluated.");
  matched
}
