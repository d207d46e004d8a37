use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::error::ApiError;

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "sessionId";

/// Extracts the session identifier cookie, rejecting the request with 401
/// before the handler runs when it is absent.
///
/// The value is the scoping key for every store query. It is parsed as a
/// UUID to match the store's id type but is never checked against the
/// users table; an unknown id simply scopes to an empty data set.
pub struct SessionUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = session_id(&parts.headers).ok_or(ApiError::Unauthorized)?;
        let user_id = value.parse::<Uuid>().map_err(|_| ApiError::Unauthorized)?;
        Ok(SessionUser(user_id))
    }
}

/// Pull the raw `sessionId` value out of the `Cookie` header, if any.
pub fn session_id(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|c| c.strip_prefix("sessionId="))
        .filter(|v| !v.is_empty())
}

/// `Set-Cookie` value establishing a session for `user_id`.
pub fn session_cookie(user_id: Uuid, ttl_seconds: i64) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}",
        SESSION_COOKIE, user_id, ttl_seconds
    )
}

/// `Set-Cookie` value expiring the session cookie.
pub fn clear_session_cookie() -> &'static str {
    "sessionId=; Path=/; Max-Age=0"
}
