use std::fmt;

use async_trait::async_trait;

/// Identifies one browser session, carried in a cookie by the presentation
/// layer. The store only ever sees the opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session-scoped key/value store with read-once retrieval.
///
/// Values are opaque strings; callers serialize what they need. `take`
/// deletes the value it returns, which is what gives flash messages their
/// at-most-once delivery.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(
        &self,
        session: &SessionId,
        key: &str,
        value: String,
    ) -> Result<(), SessionStoreError>;

    async fn take(
        &self,
        session: &SessionId,
        key: &str,
    ) -> Result<Option<String>, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
