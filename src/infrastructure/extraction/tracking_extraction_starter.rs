use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ExtractionStarter, ExtractionStarterError};
use crate::application::services::ExportStatusTracker;
use crate::domain::{ExtractionRequest, JobId};

/// Hands a validated request to the extraction engine. The engine itself
/// runs outside this service; here we register the job with the tracker and
/// log the accepted parameters so its progress can be polled.
pub struct TrackingExtractionStarter {
    tracker: Arc<ExportStatusTracker>,
}

impl TrackingExtractionStarter {
    pub fn new(tracker: Arc<ExportStatusTracker>) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl ExtractionStarter for TrackingExtractionStarter {
    async fn start(&self, request: &ExtractionRequest) -> Result<JobId, ExtractionStarterError> {
        let job_id = self.tracker.create_job(request);
        tracing::info!(
            job_id = %job_id.as_uuid(),
            max_docs = request.max_docs,
            extraction_path = %request.extraction_path,
            keywords = %request.keywords,
            mimetype_count = request.mimetypes.len(),
            "Extraction accepted"
        );
        Ok(job_id)
    }
}
