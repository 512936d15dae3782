use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ExtractionStarter, ExtractionStarterError};
use crate::domain::{ExtractionRequest, JobId};

/// Test double that records every request it receives and can be primed to
/// fail.
#[derive(Default)]
pub struct MockExtractionStarter {
    calls: Mutex<Vec<ExtractionRequest>>,
    fail_with: Option<String>,
}

impl MockExtractionStarter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    pub fn calls(&self) -> Vec<ExtractionRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ExtractionStarter for MockExtractionStarter {
    async fn start(&self, request: &ExtractionRequest) -> Result<JobId, ExtractionStarterError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        match &self.fail_with {
            Some(message) => Err(ExtractionStarterError::Unavailable(message.clone())),
            None => Ok(JobId::new()),
        }
    }
}
