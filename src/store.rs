//! In-memory token slot
//!
//! Holds at most one access token for the whole process. A save replaces
//! whatever was there before; nothing survives a restart. The token is kept as
//! the JSON value the client sent, so a numeric token reads back as a number.

use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct TokenStore {
    slot: RwLock<Option<Value>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn save(&self, token: Value) {
        *self.slot.write().await = Some(token);
    }

    pub async fn get(&self) -> Option<Value> {
        self.slot.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_store() {
        let store = TokenStore::new();
        assert_eq!(store.get().await, None);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = TokenStore::new();
        store.save(json!("first")).await;
        assert_eq!(store.get().await, Some(json!("first")));
        store.save(json!("second")).await;
        assert_eq!(store.get().await, Some(json!("second")));
    }

    #[tokio::test]
    async fn test_non_string_token_kept_as_is() {
        let store = TokenStore::new();
        store.save(json!(123)).await;
        assert_eq!(store.get().await, Some(json!(123)));
    }
}
