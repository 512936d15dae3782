mod export_status_tracker;
mod submission_service;

pub use export_status_tracker::ExportStatusTracker;
pub use submission_service::{
    RawSubmission, SubmissionError, SubmissionService, EXTRACT_STATUS_KEY,
};
