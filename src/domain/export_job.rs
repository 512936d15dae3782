use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{ExtractionRequest, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of one extraction run, kept in memory for polling by the form UI.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub id: JobId,
    pub status: JobStatus,
    pub max_docs: u32,
    pub extracted_count: u32,
    pub keywords: String,
    pub mimetypes: Vec<String>,
    pub extraction_path: String,
    pub message: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ExportJob {
    pub fn new(request: &ExtractionRequest) -> Self {
        Self {
            id: JobId::new(),
            status: JobStatus::Running,
            max_docs: request.max_docs,
            extracted_count: 0,
            keywords: request.keywords.clone(),
            mimetypes: request.mimetypes.clone(),
            extraction_path: request.extraction_path.clone(),
            message: "Export initializing".to_string(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Elapsed time; still-running jobs are measured against now.
    pub fn duration_ms(&self) -> i64 {
        let end = self.finished_at.unwrap_or_else(Utc::now);
        (end - self.started_at).num_milliseconds()
    }

    pub fn progress_percent(&self) -> u32 {
        if self.max_docs == 0 {
            return 0;
        }
        (self.extracted_count * 100 / self.max_docs).min(100)
    }
}
