use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::Cookie;

use crate::application::ports::SessionId;

pub const SESSION_COOKIE: &str = "GEDAFF_SESSION";

/// Resolves the caller's session id from the session cookie, minting a fresh
/// one when absent, and exposes it to handlers as a request extension. New
/// ids are sent back via Set-Cookie so the flash status survives the
/// post/redirect/get round trip.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let existing = request
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|raw| {
            Cookie::split_parse(raw)
                .filter_map(Result::ok)
                .find(|c| c.name() == SESSION_COOKIE)
                .map(|c| c.value().to_string())
        });

    let (session_id, minted) = match existing {
        Some(id) => (SessionId::new(id), false),
        None => (SessionId::generate(), true),
    };

    request.extensions_mut().insert(session_id.clone());

    let mut response = next.run(request).await;

    if minted {
        let cookie = Cookie::build((SESSION_COOKIE, session_id.as_str().to_string()))
            .path("/")
            .http_only(true)
            .build();
        if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}
