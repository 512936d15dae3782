pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use router::{create_router, FORM_PATH, START_PATH, STATUS_PATH};
pub use state::AppState;
