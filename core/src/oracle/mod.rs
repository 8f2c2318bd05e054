// swapmart/src/oracle/mod.rs

//! External generative-model collaborators, modelled as capability traits
//! with typed request/response schemas. Every oracle is untrusted: a
//! schema violation or transport failure must never crash the caller.
//! What happens on failure differs per capability (see each module).

pub mod chat;
pub mod media;
pub mod ranking;

pub use chat::{ChatAssistant, ChatRequest, ChatTurn, Role};
pub use media::{EnhanceRequest, EnhanceResponse, ImageEnhancer};
pub use ranking::{RankingOracle, RankingRequest, RankingResponse};
