// swapmart/src/catalog/product.rs

//! Product record and the closed category enumeration shared by forms,
//! filters, and the store itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Closed category enumeration. No other value is ever persisted; an
/// unknown string fails to parse instead of mapping to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  Electronics,
  Furniture,
  Clothing,
  Books,
  #[serde(rename = "Home Goods")]
  HomeGoods,
  Other,
}

impl Category {
  /// All categories in their canonical display order, as consumed by
  /// listing forms and filter dropdowns.
  pub const ALL: [Category; 6] = [
    Category::Electronics,
    Category::Furniture,
    Category::Clothing,
    Category::Books,
    Category::HomeGoods,
    Category::Other,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Electronics => "Electronics",
      Category::Furniture => "Furniture",
      Category::Clothing => "Clothing",
      Category::Books => "Books",
      Category::HomeGoods => "Home Goods",
      Category::Other => "Other",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = UnknownCategory;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .iter()
      .find(|c| c.as_str() == s)
      .copied()
      .ok_or_else(|| UnknownCategory(s.to_string()))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Category side of a list query. `All` (the sentinel accepted from the
/// outside world) disables category filtering entirely; `Unmatched`
/// records an unrecognized input string and matches nothing, so a bad
/// URL parameter cannot silently turn into a distinct category or fall
/// back to "All".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
  #[default]
  All,
  Only(Category),
  Unmatched(String),
}

impl CategoryFilter {
  /// Parses user-supplied filter input. Never fails: recognized names map
  /// to `Only`, the "All" sentinel (or empty input) to `All`, anything
  /// else to `Unmatched`.
  pub fn parse(input: &str) -> Self {
    if input.is_empty() || input == "All" {
      return CategoryFilter::All;
    }
    match input.parse::<Category>() {
      Ok(category) => CategoryFilter::Only(category),
      Err(_) => CategoryFilter::Unmatched(input.to_string()),
    }
  }

  pub fn matches(&self, category: Category) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Only(wanted) => *wanted == category,
      CategoryFilter::Unmatched(_) => false,
    }
  }
}

/// One marketplace listing. Read-only after creation; the only lifecycle
/// transition is owner-authenticated hard removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub owner_id: String,
  pub title: String,
  pub description: String,
  pub category: Category,
  pub price: f64,
  pub image_url: String,
  pub created_at: DateTime<Utc>,
}

/// Caller-supplied creation fields. `id` and `created_at` are generated
/// by the mutation gateway and must never come from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
  pub title: String,
  pub description: String,
  pub category: Category,
  pub price: f64,
  pub image_url: String,
}
