// swapmart/src/cart.rs

//! Client-session cart: an ordered list of product snapshots. Part of the
//! client boundary rather than the catalog contract; the app persists it
//! as an opaque blob alongside the browsing history.

use crate::catalog::product::Product;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
  items: Vec<Product>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a product snapshot. A product already in the cart is ignored;
  /// the cart holds at most one entry per listing.
  pub fn add(&mut self, product: Product) {
    if self.items.iter().any(|item| item.id == product.id) {
      return;
    }
    self.items.push(product);
  }

  pub fn remove(&mut self, product_id: &Uuid) {
    self.items.retain(|item| item.id != *product_id);
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn items(&self) -> &[Product] {
    &self.items
  }

  pub fn total(&self) -> f64 {
    self.items.iter().map(|item| item.price).sum()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}
