// swapmart/src/catalog/store.rs

//! The backing collection for the catalog, behind an injectable trait so
//! tests (and an eventual persistent backend) can swap the implementation
//! without touching the query or gateway layers.

use crate::catalog::product::Product;
use crate::error::{CatalogError, CatalogResult};

use parking_lot::RwLock;
use tracing::{debug, event, Level};
use uuid::Uuid;

/// Authoritative product collection. Implementations hand out copies,
/// never aliases into their internal state.
pub trait CatalogStore: Send + Sync {
  /// Looks up one product. Absence is a signal, not an error.
  fn get_by_id(&self, id: &Uuid) -> Option<Product>;

  /// Inserts a pre-validated product. The caller (the mutation gateway)
  /// is responsible for generating a unique id; a collision here is an
  /// invariant violation and fails with `CatalogError::DuplicateId`.
  fn insert(&self, product: Product) -> CatalogResult<()>;

  /// Removes the record only when both the id and the owner match.
  /// Returns whether a removal occurred. "Not found" and "not the owner"
  /// are indistinguishable by design.
  fn remove_if(&self, id: &Uuid, owner_id: &str) -> bool;

  /// Snapshot of every record in insertion order.
  fn all(&self) -> Vec<Product>;

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// The only store implementation shipped: a single-process, in-memory
/// collection. No persistence across restarts; callers needing durability
/// must inject a persistent `CatalogStore` of their own.
#[derive(Default)]
pub struct InMemoryCatalog {
  // Insertion order is load-bearing: it is the stable tie-break for
  // newest-first listings.
  products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store pre-populated with the given products, e.g. demo seed
  /// data. Duplicate ids in the input are rejected like any other insert.
  pub fn with_products(products: impl IntoIterator<Item = Product>) -> CatalogResult<Self> {
    let store = Self::new();
    for product in products {
      store.insert(product)?;
    }
    Ok(store)
  }
}

impl CatalogStore for InMemoryCatalog {
  fn get_by_id(&self, id: &Uuid) -> Option<Product> {
    self.products.read().iter().find(|p| p.id == *id).cloned()
  }

  fn insert(&self, product: Product) -> CatalogResult<()> {
    let mut products = self.products.write();
    if products.iter().any(|p| p.id == product.id) {
      event!(Level::ERROR, product_id = %product.id, "Duplicate id reached the store; id generation is broken.");
      return Err(CatalogError::DuplicateId { id: product.id });
    }
    debug!(product_id = %product.id, title = %product.title, "Product inserted.");
    products.push(product);
    Ok(())
  }

  fn remove_if(&self, id: &Uuid, owner_id: &str) -> bool {
    let mut products = self.products.write();
    let before = products.len();
    products.retain(|p| !(p.id == *id && p.owner_id == owner_id));
    let removed = products.len() < before;
    debug!(product_id = %id, removed, "Owner-scoped removal attempted.");
    removed
  }

  fn all(&self) -> Vec<Product> {
    self.products.read().clone()
  }

  fn len(&self) -> usize {
    self.products.read().len()
  }
}
