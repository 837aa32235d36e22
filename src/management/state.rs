use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

/// Default lifetime of a pending state token. Authorization codes die after a
/// few minutes on the provider side, so anything older than this is dead.
pub const STATE_TOKEN_TTL_SECS: i64 = 600;

/// Store for pending anti-CSRF state tokens.
///
/// One token is minted per authorization flow and consumed by the callback.
/// The store is injected as a trait object so a multi-instance deployment can
/// swap the in-memory map for a shared backend.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Records a freshly minted token as live.
    async fn insert(&self, token: String);

    /// Consumes a token. Returns whether it was live; the entry is removed
    /// either way, so a second call with the same token always fails.
    async fn take(&self, token: &str) -> bool;

    /// Drops tokens whose flow never completed.
    async fn sweep(&self);
}

/// Process-local [`StateStore`] keeping each token with its creation time.
pub struct InMemoryStateRegistry {
    ttl_seconds: i64,
    entries: Mutex<HashMap<String, i64>>,
}

impl InMemoryStateRegistry {
    pub fn new(ttl_seconds: i64) -> Self {
        Self {
            ttl_seconds,
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStateRegistry {
    fn default() -> Self {
        Self::new(STATE_TOKEN_TTL_SECS)
    }
}

#[async_trait]
impl StateStore for InMemoryStateRegistry {
    async fn insert(&self, token: String) {
        let mut entries = self.entries.lock().await;
        entries.insert(token, Utc::now().timestamp());
    }

    async fn take(&self, token: &str) -> bool {
        let mut entries = self.entries.lock().await;
        match entries.remove(token) {
            Some(created_at) => Utc::now().timestamp() - created_at < self.ttl_seconds,
            None => false,
        }
    }

    async fn sweep(&self) {
        let now = Utc::now().timestamp();
        let mut entries = self.entries.lock().await;
        entries.retain(|_, created_at| now - *created_at < self.ttl_seconds);
    }
}
