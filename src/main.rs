use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use gedaff::application::ports::{ExtractionStarter, SessionStore};
use gedaff::application::services::{ExportStatusTracker, SubmissionService};
use gedaff::infrastructure::extraction::TrackingExtractionStarter;
use gedaff::infrastructure::observability::{init_tracing, TracingConfig};
use gedaff::infrastructure::session::InMemorySessionStore;
use gedaff::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::detect().map_err(|e| anyhow::anyhow!(e))?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let session_store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let status_tracker = Arc::new(ExportStatusTracker::new());
    let starter: Arc<dyn ExtractionStarter> =
        Arc::new(TrackingExtractionStarter::new(Arc::clone(&status_tracker)));

    let submission_service = Arc::new(SubmissionService::new(
        Arc::clone(&session_store),
        starter,
        settings.extraction.default_max_docs,
        settings.extraction.default_path.clone(),
    ));

    let cleanup_interval = Duration::from_secs(settings.extraction.cleanup_interval_seconds);
    let cleanup_tracker = Arc::clone(&status_tracker);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let removed = cleanup_tracker.cleanup_old_jobs();
            if removed > 0 {
                tracing::debug!(removed, "Dropped finished export jobs past retention");
            }
        }
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        session_store,
        submission_service,
        status_tracker,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
