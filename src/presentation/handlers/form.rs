use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Serialize;

use crate::application::ports::SessionId;
use crate::application::services::EXTRACT_STATUS_KEY;
use crate::domain::{FlashStatus, MimetypeOption, SUPPORTED_MIMETYPES};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormViewModel {
    pub default_max_docs: u32,
    pub default_path: String,
    pub available_mimetypes: Vec<MimetypeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_status: Option<FlashStatus>,
}

/// Renders the extraction form view model. Never fails from the caller's
/// perspective: a broken flash status is logged and dropped, not surfaced.
#[tracing::instrument(skip(state, session))]
pub async fn form_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> impl IntoResponse {
    let extract_status = match state.session_store.take(&session, EXTRACT_STATUS_KEY).await {
        Ok(Some(raw)) => match FlashStatus::from_json(&raw) {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::error!(error = %e, "Failed to parse extract_status from session");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read session store");
            None
        }
    };

    Json(FormViewModel {
        default_max_docs: state.settings.extraction.default_max_docs,
        default_path: state.settings.extraction.default_path.clone(),
        available_mimetypes: SUPPORTED_MIMETYPES.to_vec(),
        extract_status,
    })
}
