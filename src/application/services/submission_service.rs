use std::sync::Arc;

use crate::application::ports::{
    ExtractionStarter, ExtractionStarterError, SessionId, SessionStore,
};
use crate::domain::{ExtractionRequest, FlashStatus, JobId, ValidationError};

/// Session key the flash status lives under between submit and render.
pub const EXTRACT_STATUS_KEY: &str = "extract_status";

/// Form fields as submitted, before defaulting and validation.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub max_docs: Option<String>,
    pub extraction_path: Option<String>,
    pub keywords: Option<String>,
    pub mimetypes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Starter(#[from] ExtractionStarterError),
}

/// Runs the submit pipeline: default, validate, delegate to the extraction
/// starter, and record the outcome as a flash status. Every path produces a
/// flash; the caller redirects unconditionally.
pub struct SubmissionService {
    session_store: Arc<dyn SessionStore>,
    starter: Arc<dyn ExtractionStarter>,
    default_max_docs: u32,
    default_path: String,
}

impl SubmissionService {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        starter: Arc<dyn ExtractionStarter>,
        default_max_docs: u32,
        default_path: String,
    ) -> Self {
        Self {
            session_store,
            starter,
            default_max_docs,
            default_path,
        }
    }

    pub async fn submit(&self, session: &SessionId, raw: RawSubmission) -> FlashStatus {
        let flash = match self.start_extraction(raw).await {
            Ok((request, job_id)) => {
                tracing::info!(
                    job_id = %job_id.as_uuid(),
                    max_docs = request.max_docs,
                    extraction_path = %request.extraction_path,
                    "Extraction job started"
                );
                FlashStatus::success(request.summary())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Extraction submission rejected");
                FlashStatus::failure(format!("Error starting extraction: {}", e))
            }
        };

        self.store_flash(session, &flash).await;
        flash
    }

    /// Records a failure flash for a submission that never reached the
    /// pipeline, e.g. an unreadable request body.
    pub async fn reject(&self, session: &SessionId, reason: &str) -> FlashStatus {
        let flash = FlashStatus::failure(format!("Error starting extraction: {}", reason));
        self.store_flash(session, &flash).await;
        flash
    }

    async fn start_extraction(
        &self,
        raw: RawSubmission,
    ) -> Result<(ExtractionRequest, JobId), SubmissionError> {
        // Absent or unparseable counts fall back to the default; out-of-range
        // values must reach validation, so the parse is signed.
        let max_docs = raw
            .max_docs
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(i64::from(self.default_max_docs));

        let path = raw
            .extraction_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(&self.default_path);

        let keywords = raw.keywords.as_deref().unwrap_or("");

        let request = ExtractionRequest::new(max_docs, path, keywords, raw.mimetypes)?;
        let job_id = self.starter.start(&request).await?;
        Ok((request, job_id))
    }

    async fn store_flash(&self, session: &SessionId, flash: &FlashStatus) {
        let encoded = match flash.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode flash status");
                return;
            }
        };

        if let Err(e) = self
            .session_store
            .put(session, EXTRACT_STATUS_KEY, encoded)
            .await
        {
            tracing::error!(error = %e, "Failed to store flash status");
        }
    }
}
