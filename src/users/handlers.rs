use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::ApiError,
    session::{self, SessionUser},
    state::AppState,
    users::{
        dto::{CreateUserRequest, LoginRequest},
        repo::User,
    },
};

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<StatusCode, ApiError> {
    payload.validate()?;

    let id = Uuid::new_v4();
    User::create(&state.db, id, &payload.username, &payload.password).await?;

    info!(user_id = %id, username = %payload.username, "user registered");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state, headers, payload))]
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let user = User::find_by_credentials(&state.db, &payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login credentials did not match");
            ApiError::Unauthorized
        })?;

    let mut response_headers = HeaderMap::new();
    if session::session_id(&headers).is_none() {
        let cookie = session::session_cookie(user.id, state.config.session.ttl_seconds);
        response_headers.insert(header::SET_COOKIE, HeaderValue::from_str(&cookie).unwrap());
        info!(user_id = %user.id, "user logged in, session established");
    } else {
        // An existing sessionId cookie, whatever its value, is left as-is.
        debug!(user_id = %user.id, "login with existing session cookie, not overwriting");
    }

    Ok((StatusCode::OK, response_headers))
}

#[instrument]
pub async fn logout(SessionUser(user_id): SessionUser) -> impl IntoResponse {
    debug!(%user_id, "session cookie cleared");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        HeaderValue::from_static(session::clear_session_cookie()),
    );
    (StatusCode::OK, headers)
}
