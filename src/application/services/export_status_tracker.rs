use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, Utc};

use crate::domain::{ExportJob, ExtractionRequest, JobId, JobStatus};

const DEFAULT_RETENTION_MINUTES: i64 = 30;

/// In-memory registry of extraction jobs, polled by the form UI and updated
/// by the extraction engine. Finished jobs are retained for a bounded window
/// so a user can still see the final state after the run ends.
pub struct ExportStatusTracker {
    jobs: Mutex<HashMap<JobId, ExportJob>>,
    retention: Duration,
}

impl ExportStatusTracker {
    pub fn new() -> Self {
        Self::with_retention(Duration::minutes(DEFAULT_RETENTION_MINUTES))
    }

    pub fn with_retention(retention: Duration) -> Self {
        Self {
            jobs: Mutex::new(HashMap::new()),
            retention,
        }
    }

    pub fn create_job(&self, request: &ExtractionRequest) -> JobId {
        let job = ExportJob::new(request);
        let id = job.id;
        self.lock().insert(id, job);
        id
    }

    pub fn update(&self, id: JobId, status: JobStatus, extracted_count: u32, message: &str) {
        if let Some(job) = self.lock().get_mut(&id) {
            job.status = status;
            job.extracted_count = extracted_count;
            job.message = message.to_string();
            if status.is_terminal() {
                job.finished_at = Some(Utc::now());
            }
        }
    }

    pub fn update_extraction_path(&self, id: JobId, path: &str) {
        if let Some(job) = self.lock().get_mut(&id) {
            job.extraction_path = path.to_string();
        }
    }

    pub fn get(&self, id: JobId) -> Option<ExportJob> {
        self.lock().get(&id).cloned()
    }

    /// Drops finished jobs older than the retention window. Returns how many
    /// were removed.
    pub fn cleanup_old_jobs(&self) -> usize {
        let cutoff = Utc::now() - self.retention;
        let mut jobs = self.lock();
        let before = jobs.len();
        jobs.retain(|_, job| match job.finished_at {
            Some(finished) => finished > cutoff,
            None => true,
        });
        before - jobs.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<JobId, ExportJob>> {
        // A poisoned lock only means a panic mid-update; the map stays usable.
        self.jobs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ExportStatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
