// swapmart/src/recommend/mod.rs

//! Personalized recommendations: the adapter from browsing history to
//! live products, plus the fetch-supersession session guard.

pub mod adapter;
pub mod session;

pub use adapter::{Recommender, DEFAULT_ORACLE_TIMEOUT};
pub use session::{FetchTicket, RecommendationSession};
