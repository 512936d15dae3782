use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::session::session_middleware;
use crate::presentation::handlers::{form_handler, health_handler, status_handler, submit_handler};
use crate::presentation::state::AppState;

// Route paths mirror the legacy webscript URLs so existing bookmarks and the
// post-submit redirect keep working.
pub const FORM_PATH: &str = "/alfresco/s/gedaff/extract/form";
pub const START_PATH: &str = "/alfresco/s/gedaff/extract/start";
pub const STATUS_PATH: &str = "/alfresco/s/gedaff/extract/status";

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(FORM_PATH, get(form_handler))
        .route(START_PATH, post(submit_handler))
        .route(STATUS_PATH, get(status_handler))
        .layer(middleware::from_fn(session_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
