// swapmart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
  /// Field-level validation failure, reported before any mutation occurs.
  /// `fields` names every offending field, not just the first one found.
  #[error("Validation failed for field(s): {}", fields.join(", "))]
  Validation { fields: Vec<String> },

  /// A second record with an id already present in the store. Ids are
  /// generated server-side, so this signals a programming error rather
  /// than a user-correctable condition.
  #[error("Duplicate product id: {id}")]
  DuplicateId { id: Uuid },

  /// Image-enhancement oracle failure. Unlike ranking failures (absorbed
  /// inside the Recommender), enhancement is a foreground user action and
  /// its failure is surfaced with context.
  #[error("Image enhancement failed. Source: {source}")]
  Enhancement {
    #[source]
    source: AnyhowError,
  },
}

impl CatalogError {
  /// Convenience constructor for a single-field validation failure.
  pub fn invalid_field(field: impl Into<String>) -> Self {
    CatalogError::Validation {
      fields: vec![field.into()],
    }
  }
}

// Not-found / not-owner conditions are deliberately NOT variants here.
// Lookups return Option and owner-scoped deletes return bool: those are
// expected, frequent outcomes, never exceptions.

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
