// src/lib.rs

//! Swapmart: an in-memory marketplace catalog with filtered queries,
//! owner-scoped mutations, and best-effort AI-assisted recommendations.
//!
//! The crate is organized around a few collaborating pieces:
//!  - An injectable [`CatalogStore`] holding the authoritative product
//!    records (the shipped implementation is in-memory).
//!  - A read-only query engine producing filtered, newest-first views.
//!  - A mutation gateway ([`Catalog`]) that validates and authorizes all
//!    writes and generates ids/timestamps server-side.
//!  - Oracle capability traits for the external generative-model
//!    collaborators (ranking, image enhancement, chat), each with typed
//!    request/response schemas.
//!  - A [`Recommender`] that turns browsing history into live product
//!    records via the ranking oracle, degrading to empty on any failure.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod history;
pub mod oracle;
pub mod recommend;

// --- Re-exports for the Public API ---

pub use crate::catalog::gateway::Catalog;
pub use crate::catalog::product::{Category, CategoryFilter, NewProduct, Product, UnknownCategory};
pub use crate::catalog::query::ProductFilter;
pub use crate::catalog::store::{CatalogStore, InMemoryCatalog};

pub use crate::history::{BrowsingHistory, HISTORY_CAP, SIGNAL_WINDOW};

pub use crate::oracle::chat::{ChatAssistant, ChatRequest, ChatTurn, Role};
pub use crate::oracle::media::{enhance_image, EnhanceRequest, EnhanceResponse, ImageEnhancer};
pub use crate::oracle::ranking::{RankingOracle, RankingRequest, RankingResponse};

pub use crate::recommend::adapter::{Recommender, DEFAULT_ORACLE_TIMEOUT};
pub use crate::recommend::session::{FetchTicket, RecommendationSession};

pub use crate::auth::{CredentialStore, InMemoryCredentials, UserAccount};
pub use crate::cart::Cart;

pub use crate::error::{CatalogError, CatalogResult};
