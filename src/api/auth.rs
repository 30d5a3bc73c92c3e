//! Login and logout endpoints.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

use crate::auth;
use crate::db::{LoginRequest, LoginResponse, LogoutRequest, LogoutResponse};
use crate::AppState;

use super::error::ApiError;

/// Authenticate a user and return a session token.
///
/// POST /auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = auth::authenticate(
        &state.db,
        &state.config.auth.token_secret,
        &request.username,
        &request.password,
    )
    .await?;

    info!(username = %response.user.username, "User logged in");
    Ok(Json(response))
}

/// End a user's session.
///
/// POST /auth/logout
pub async fn logout(Json(request): Json<LogoutRequest>) -> Json<LogoutResponse> {
    Json(auth::acknowledge_logout(&request.token))
}
