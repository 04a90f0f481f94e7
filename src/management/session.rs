use std::sync::Arc;

use tokio::sync::Mutex;

use crate::types::SessionToken;

/// Holds the session token for the lifetime of the process.
///
/// Clones share the same slot. Writes replace the whole token under the
/// lock, so a reader sees either the old token or the new one.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    token: Arc<Mutex<Option<SessionToken>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn store(&self, token: SessionToken) {
        let mut lock = self.token.lock().await;
        *lock = Some(token);
    }

    pub async fn clear(&self) -> Option<SessionToken> {
        self.token.lock().await.take()
    }

    pub async fn current_token(&self) -> Option<SessionToken> {
        self.token.lock().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.token
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| !t.is_empty())
    }
}
