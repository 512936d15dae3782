use chrono::Duration;

use gedaff::application::services::ExportStatusTracker;
use gedaff::domain::{ExtractionRequest, JobId, JobStatus};

fn request() -> ExtractionRequest {
    ExtractionRequest::new(1000, "/tmp/out", "", vec![]).unwrap()
}

#[test]
fn given_created_job_when_fetched_then_snapshot_matches_request() {
    let tracker = ExportStatusTracker::new();
    let id = tracker.create_job(&request());

    let job = tracker.get(id).unwrap();
    assert_eq!(job.id, id);
    assert_eq!(job.status, JobStatus::Running);
    assert_eq!(job.max_docs, 1000);
    assert_eq!(job.extraction_path, "/tmp/out");
}

#[test]
fn given_unknown_id_when_fetched_then_none() {
    let tracker = ExportStatusTracker::new();
    assert!(tracker.get(JobId::new()).is_none());
}

#[test]
fn given_terminal_update_then_finish_time_stamped() {
    let tracker = ExportStatusTracker::new();
    let id = tracker.create_job(&request());

    tracker.update(id, JobStatus::Completed, 1000, "Export completed");

    let job = tracker.get(id).unwrap();
    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.extracted_count, 1000);
    assert_eq!(job.message, "Export completed");
    assert!(job.finished_at.is_some());
}

#[test]
fn given_progress_update_then_no_finish_time() {
    let tracker = ExportStatusTracker::new();
    let id = tracker.create_job(&request());

    tracker.update(id, JobStatus::Running, 250, "Export in progress");

    let job = tracker.get(id).unwrap();
    assert!(job.finished_at.is_none());
}

#[test]
fn given_path_update_then_snapshot_reflects_it() {
    let tracker = ExportStatusTracker::new();
    let id = tracker.create_job(&request());

    tracker.update_extraction_path(id, "/tmp/out/Export_20260829_120000");

    assert_eq!(
        tracker.get(id).unwrap().extraction_path,
        "/tmp/out/Export_20260829_120000"
    );
}

#[test]
fn given_expired_finished_job_when_cleaning_then_removed() {
    let tracker = ExportStatusTracker::with_retention(Duration::zero());
    let finished = tracker.create_job(&request());
    let running = tracker.create_job(&request());

    tracker.update(finished, JobStatus::Failed, 0, "Export failed");

    let removed = tracker.cleanup_old_jobs();
    assert_eq!(removed, 1);
    assert!(tracker.get(finished).is_none());
    assert!(tracker.get(running).is_some());
}

#[test]
fn given_recent_finished_job_when_cleaning_then_retained() {
    let tracker = ExportStatusTracker::new();
    let id = tracker.create_job(&request());
    tracker.update(id, JobStatus::Completed, 1000, "Export completed");

    assert_eq!(tracker.cleanup_old_jobs(), 0);
    assert!(tracker.get(id).is_some());
}
