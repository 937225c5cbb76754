//! Session cookie plumbing.
//!
//! Two cookies carry the token pair: `accessToken` and `refreshToken`,
//! both `HttpOnly` with `SameSite=Lax`, `Secure` unless configured off for
//! plain-HTTP development. Set on login and refresh, cleared on logout.

use axum::http::header::{HeaderMap, HeaderName, COOKIE, SET_COOKIE};
use axum::response::AppendHeaders;

use quill_auth::{TokenIssuer, TokenPair};

pub const ACCESS_COOKIE: &str = "accessToken";
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Read a cookie value from a request's `Cookie` header.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

fn cookie(name: &str, value: &str, max_age: i64, secure: bool) -> String {
    let mut rendered = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if secure {
        rendered.push_str("; Secure");
    }
    rendered
}

/// `Set-Cookie` headers installing a token pair.
pub fn session_headers(
    tokens: &TokenPair,
    issuer: &TokenIssuer,
    secure: bool,
) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (
            SET_COOKIE,
            cookie(
                ACCESS_COOKIE,
                &tokens.access_token,
                issuer.access_ttl_secs(),
                secure,
            ),
        ),
        (
            SET_COOKIE,
            cookie(
                REFRESH_COOKIE,
                &tokens.refresh_token,
                issuer.refresh_ttl_secs(),
                secure,
            ),
        ),
    ])
}

/// `Set-Cookie` headers expiring both session cookies.
pub fn clear_session_headers(secure: bool) -> AppendHeaders<[(HeaderName, String); 2]> {
    AppendHeaders([
        (SET_COOKIE, cookie(ACCESS_COOKIE, "", 0, secure)),
        (SET_COOKIE, cookie(REFRESH_COOKIE, "", 0, secure)),
    ])
}
