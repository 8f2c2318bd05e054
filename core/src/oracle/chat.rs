// swapmart/src/oracle/chat.rs

//! The storefront chat assistant. A thin capability: the conversation so
//! far plus the latest message in, a plain-text reply out. Implementations
//! typically ground their answers in catalog searches.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Model,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
  pub role: Role,
  pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
  /// The conversation history, oldest first.
  pub history: Vec<ChatTurn>,
  /// The latest message from the user.
  pub message: String,
}

#[async_trait]
pub trait ChatAssistant: Send + Sync {
  async fn reply(&self, request: ChatRequest) -> anyhow::Result<String>;
}
