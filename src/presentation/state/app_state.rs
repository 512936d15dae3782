use std::sync::Arc;

use crate::application::ports::SessionStore;
use crate::application::services::{ExportStatusTracker, SubmissionService};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub session_store: Arc<dyn SessionStore>,
    pub submission_service: Arc<SubmissionService>,
    pub status_tracker: Arc<ExportStatusTracker>,
    pub settings: Settings,
}
