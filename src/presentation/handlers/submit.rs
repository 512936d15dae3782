use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum_extra::extract::{Form, FormRejection};
use serde::Deserialize;

use crate::application::ports::SessionId;
use crate::application::services::RawSubmission;
use crate::presentation::router::FORM_PATH;
use crate::presentation::state::AppState;

/// Submitted form fields. `mimetypes` may appear zero, one, or many times;
/// the multi-value form decoder collapses every shape into one list.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(rename = "maxDocs")]
    pub max_docs: Option<String>,
    #[serde(rename = "extractionPath")]
    pub extraction_path: Option<String>,
    pub keywords: Option<String>,
    #[serde(default)]
    pub mimetypes: Vec<String>,
}

impl From<SubmitForm> for RawSubmission {
    fn from(form: SubmitForm) -> Self {
        Self {
            max_docs: form.max_docs,
            extraction_path: form.extraction_path,
            keywords: form.keywords,
            mimetypes: form.mimetypes,
        }
    }
}

/// Handles a form submission. Both outcomes land on the same redirect; the
/// result only decides which flash status the next render shows.
#[tracing::instrument(skip(state, session, form))]
pub async fn submit_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) => {
            state
                .submission_service
                .submit(&session, form.into())
                .await;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Malformed form submission");
            state
                .submission_service
                .reject(&session, "malformed form submission")
                .await;
        }
    }

    redirect_to_form()
}

// axum's Redirect helpers emit 303/307/308; the form contract is 302.
fn redirect_to_form() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, FORM_PATH)]).into_response()
}
