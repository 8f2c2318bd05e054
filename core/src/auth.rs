// swapmart/src/auth.rs

//! Mock credential store, decoupled from any UI layer. This is explicitly
//! a stand-in: the capability surface is `find(email)` / `save(account)`
//! so a real user database can replace the in-memory map without touching
//! callers. Password hashing lives with the application, not here.

use crate::error::{CatalogError, CatalogResult};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
  pub display_name: String,
  pub email: String,
  #[serde(skip_serializing)] // Never send the hash to a client
  #[serde(default)]
  pub password_hash: String,
}

pub trait CredentialStore: Send + Sync {
  fn find(&self, email: &str) -> Option<UserAccount>;

  /// Saves a new account. A duplicate email is a validation failure, not
  /// an invariant violation: users do retry signups.
  fn save(&self, account: UserAccount) -> CatalogResult<()>;
}

#[derive(Default)]
pub struct InMemoryCredentials {
  accounts: RwLock<HashMap<String, UserAccount>>,
}

impl InMemoryCredentials {
  pub fn new() -> Self {
    Self::default()
  }
}

impl CredentialStore for InMemoryCredentials {
  fn find(&self, email: &str) -> Option<UserAccount> {
    self.accounts.read().get(email).cloned()
  }

  fn save(&self, account: UserAccount) -> CatalogResult<()> {
    let mut accounts = self.accounts.write();
    if accounts.contains_key(&account.email) {
      return Err(CatalogError::invalid_field("email"));
    }
    debug!(email = %account.email, "Account saved.");
    accounts.insert(account.email.clone(), account);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CatalogError;

  fn account(email: &str) -> UserAccount {
    UserAccount {
      display_name: "Someone".to_string(),
      email: email.to_string(),
      password_hash: "hash".to_string(),
    }
  }

  #[test]
  fn save_then_find_round_trips() {
    let store = InMemoryCredentials::new();
    store.save(account("a@example.com")).unwrap();
    let found = store.find("a@example.com").unwrap();
    assert_eq!(found.display_name, "Someone");
    assert!(store.find("b@example.com").is_none());
  }

  #[test]
  fn duplicate_email_is_a_validation_failure() {
    let store = InMemoryCredentials::new();
    store.save(account("a@example.com")).unwrap();
    match store.save(account("a@example.com")) {
      Err(CatalogError::Validation { fields }) => assert_eq!(fields, vec!["email".to_string()]),
      other => panic!("Expected validation failure, got {:?}", other),
    }
  }

  #[test]
  fn password_hash_is_never_serialized() {
    let json = serde_json::to_string(&account("a@example.com")).unwrap();
    assert!(!json.contains("hash"));
  }
}
