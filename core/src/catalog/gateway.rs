// swapmart/src/catalog/gateway.rs

//! Write side of the catalog: validates and authorizes mutations before
//! they reach the store, and generates the server-side fields.

use crate::catalog::product::{NewProduct, Product};
use crate::catalog::query::{self, ProductFilter};
use crate::catalog::store::CatalogStore;
use crate::error::{CatalogError, CatalogResult};

use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The catalog service handed to callers: owns the injected store and is
/// the only path through which records are created or removed.
#[derive(Clone)]
pub struct Catalog {
  store: Arc<dyn CatalogStore>,
}

impl Catalog {
  pub fn new(store: Arc<dyn CatalogStore>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &Arc<dyn CatalogStore> {
    &self.store
  }

  /// Creates a listing on behalf of `owner_id`.
  ///
  /// Validation runs before any mutation: an invalid request returns
  /// `CatalogError::Validation` naming every offending field and leaves
  /// the store untouched. `id` and `created_at` are generated here;
  /// callers never supply them. On success the record is immediately
  /// visible to `get` and `list`, sorting first in newest-first views.
  #[instrument(name = "catalog::create", skip(self, fields), fields(owner_id = %owner_id, title = %fields.title))]
  pub fn create(&self, owner_id: &str, fields: NewProduct) -> CatalogResult<Product> {
    let mut invalid = Vec::new();
    if fields.title.trim().is_empty() {
      invalid.push("title".to_string());
    }
    // NaN fails both comparisons below on its own, but name it explicitly.
    if !fields.price.is_finite() || fields.price < 0.0 {
      invalid.push("price".to_string());
    }
    if !invalid.is_empty() {
      warn!(fields = ?invalid, "Rejected product creation on validation.");
      return Err(CatalogError::Validation { fields: invalid });
    }

    let product = Product {
      id: Uuid::new_v4(),
      owner_id: owner_id.to_string(),
      title: fields.title,
      description: fields.description,
      category: fields.category,
      price: fields.price,
      image_url: fields.image_url,
      created_at: Utc::now(),
    };
    let id = product.id;
    self.store.insert(product.clone())?;
    info!(product_id = %id, "Product created.");
    Ok(product)
  }

  /// Deletes a listing if and only if `requester_id` owns it. The false
  /// outcome covers both "no such id" and "not the owner" so that a
  /// failed delete does not leak the existence of someone else's listing.
  #[instrument(name = "catalog::delete", skip(self), fields(product_id = %product_id, requester_id = %requester_id))]
  pub fn delete(&self, product_id: &Uuid, requester_id: &str) -> bool {
    let removed = self.store.remove_if(product_id, requester_id);
    if removed {
      info!("Product deleted.");
    } else {
      warn!("Delete refused: id unknown or requester is not the owner.");
    }
    removed
  }

  pub fn get(&self, id: &Uuid) -> Option<Product> {
    self.store.get_by_id(id)
  }

  pub fn list(&self, filter: &ProductFilter) -> Vec<Product> {
    query::list(self.store.as_ref(), filter)
  }
}
