use gedaff::application::ports::{SessionId, SessionStore};
use gedaff::infrastructure::session::InMemorySessionStore;

#[tokio::test]
async fn given_stored_value_when_taken_then_returned_exactly_once() {
    let store = InMemorySessionStore::new();
    let session = SessionId::generate();

    store
        .put(&session, "extract_status", "{\"success\":true}".to_string())
        .await
        .unwrap();

    assert_eq!(
        store.take(&session, "extract_status").await.unwrap(),
        Some("{\"success\":true}".to_string())
    );
    assert_eq!(store.take(&session, "extract_status").await.unwrap(), None);
}

#[tokio::test]
async fn given_two_sessions_then_values_are_isolated() {
    let store = InMemorySessionStore::new();
    let alice = SessionId::generate();
    let bob = SessionId::generate();

    store
        .put(&alice, "extract_status", "alice".to_string())
        .await
        .unwrap();

    assert_eq!(store.take(&bob, "extract_status").await.unwrap(), None);
    assert_eq!(
        store.take(&alice, "extract_status").await.unwrap(),
        Some("alice".to_string())
    );
}

#[tokio::test]
async fn given_overwrite_then_latest_value_wins() {
    let store = InMemorySessionStore::new();
    let session = SessionId::generate();

    store
        .put(&session, "extract_status", "first".to_string())
        .await
        .unwrap();
    store
        .put(&session, "extract_status", "second".to_string())
        .await
        .unwrap();

    assert_eq!(
        store.take(&session, "extract_status").await.unwrap(),
        Some("second".to_string())
    );
}

#[tokio::test]
async fn given_unknown_session_when_taking_then_none() {
    let store = InMemorySessionStore::new();
    assert_eq!(
        store
            .take(&SessionId::new("missing"), "extract_status")
            .await
            .unwrap(),
        None
    );
}
