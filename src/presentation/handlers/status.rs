use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ExportJob, JobId};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStatusResponse {
    pub job_id: String,
    pub status: String,
    pub max_docs: u32,
    pub extracted_count: u32,
    pub progress: u32,
    pub message: String,
    pub keywords: String,
    pub mimetypes: Vec<String>,
    pub extraction_path: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration_ms: i64,
}

impl ExportStatusResponse {
    fn from_job(job: &ExportJob) -> Self {
        Self {
            job_id: job.id.as_uuid().to_string(),
            status: job.status.as_str().to_string(),
            max_docs: job.max_docs,
            extracted_count: job.extracted_count,
            progress: job.progress_percent(),
            message: job.message.clone(),
            keywords: job.keywords.clone(),
            mimetypes: job.mimetypes.clone(),
            extraction_path: job.extraction_path.clone(),
            start_time: job.started_at.to_rfc3339(),
            end_time: job.finished_at.map(|t| t.to_rfc3339()),
            duration_ms: job.duration_ms(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Polled by the form UI for live progress, hence the no-store cache policy.
#[tracing::instrument(skip(state))]
pub async fn status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Response {
    let no_store = [(header::CACHE_CONTROL, "no-store")];

    let Some(job_id) = query.job_id.filter(|id| !id.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            no_store,
            Json(ErrorResponse {
                error: "Missing jobId parameter".to_string(),
            }),
        )
            .into_response();
    };

    let uuid = match Uuid::parse_str(job_id.trim()) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                no_store,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    match state.status_tracker.get(JobId::from_uuid(uuid)) {
        Some(job) => (
            StatusCode::OK,
            no_store,
            Json(ExportStatusResponse::from_job(&job)),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            no_store,
            Json(ErrorResponse {
                error: format!("Export job not found: {}", job_id),
            }),
        )
            .into_response(),
    }
}
