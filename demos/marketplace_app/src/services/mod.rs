// demos/marketplace_app/src/services/mod.rs

//! Application services: password hashing plus the mock oracle backends
//! standing in for the hosted generative models.

pub mod assistant_mock;
pub mod auth_service;
pub mod enhancer_mock;
pub mod ranking_mock;

pub use assistant_mock::MockChatAssistant;
pub use enhancer_mock::MockImageEnhancer;
pub use ranking_mock::MockRankingOracle;
