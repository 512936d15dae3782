mod extraction_starter;
mod session_store;

pub use extraction_starter::{ExtractionStarter, ExtractionStarterError};
pub use session_store::{SessionId, SessionStore, SessionStoreError};
