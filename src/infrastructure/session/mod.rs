mod in_memory_session_store;
mod session_middleware;

pub use in_memory_session_store::InMemorySessionStore;
pub use session_middleware::{session_middleware, SESSION_COOKIE};
