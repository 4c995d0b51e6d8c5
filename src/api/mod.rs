//! API handlers for the catalog endpoints

pub mod authors;
pub mod catalog;
pub mod health;
pub mod openapi;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Cookie carrying the anonymous client session id
pub const SESSION_COOKIE: &str = "folium_session";

/// Resolve the client session from the cookie jar, minting a fresh id
/// (and setting the cookie) when none is present or it does not parse.
/// The returned jar must travel back in the response for the mint to stick.
pub fn client_session(jar: CookieJar) -> (Uuid, CookieJar) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(session) = Uuid::parse_str(cookie.value()) {
            return (session, jar);
        }
    }

    let session = Uuid::new_v4();
    let mut cookie = Cookie::new(SESSION_COOKIE, session.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    let jar = jar.add(cookie);
    (session, jar)
}

/// Parse a path segment as a record identifier.
/// Malformed input is rejected here, before any database query runs.
pub fn parse_id(raw: &str) -> AppResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidIdentifier(format!("Invalid identifier: {}", raw)))
}

/// 302 redirect. Post-create and post-delete flows use 302 specifically,
/// not the 303 that axum's Redirect::to produces.
pub fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(parse_id("not-an-id").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("1e3").is_err());
    }

    #[test]
    fn test_client_session_round_trip() {
        let (session, jar) = client_session(CookieJar::new());
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.value(), session.to_string());

        // A jar that already carries the cookie keeps the same session.
        let (again, _) = client_session(jar);
        assert_eq!(again, session);
    }

    #[test]
    fn test_client_session_replaces_garbage_cookie() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));
        let (session, jar) = client_session(jar);
        assert_eq!(jar.get(SESSION_COOKIE).unwrap().value(), session.to_string());
    }
}
