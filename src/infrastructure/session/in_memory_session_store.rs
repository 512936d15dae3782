use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{SessionId, SessionStore, SessionStoreError};

/// Process-local session store. The host serializes access per session, so a
/// single map behind one lock is enough; there is no cross-process sharing.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, HashMap<String, String>>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(
        &self,
        session: &SessionId,
        key: &str,
        value: String,
    ) -> Result<(), SessionStoreError> {
        self.lock()
            .entry(session.as_str().to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn take(
        &self,
        session: &SessionId,
        key: &str,
    ) -> Result<Option<String>, SessionStoreError> {
        let mut sessions = self.lock();
        let value = match sessions.get_mut(session.as_str()) {
            Some(values) => values.remove(key),
            None => return Ok(None),
        };
        if sessions
            .get(session.as_str())
            .is_some_and(|values| values.is_empty())
        {
            sessions.remove(session.as_str());
        }
        Ok(value)
    }
}
