use async_trait::async_trait;

use crate::domain::{ExtractionRequest, JobId};

/// Boundary to the extraction engine. Starting a job is fire-and-forget:
/// the call either fails synchronously or returns the id of a job that the
/// engine will drive to completion on its own.
#[async_trait]
pub trait ExtractionStarter: Send + Sync {
    async fn start(&self, request: &ExtractionRequest) -> Result<JobId, ExtractionStarterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionStarterError {
    #[error("extraction rejected: {0}")]
    Rejected(String),
    #[error("extraction engine unavailable: {0}")]
    Unavailable(String),
}
