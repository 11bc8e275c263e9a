//! Session stub route handlers.
//!
//! There is no authentication server. "Login" installs a session-local user
//! in the store; "logout" removes it along with the cart, preserving the
//! wishlist. No identity is ever verified.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printshop_core::User;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Current session response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Login request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Current session user, if any.
#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Json<SessionResponse> {
    let store = state.store();
    Json(SessionResponse {
        authenticated: store.is_authenticated(),
        user: store.user().cloned(),
    })
}

/// Install a session-local user.
#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>> {
    if body.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if body.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }

    let user = User::new(body.name.trim(), body.email.trim(), body.phone);
    state.store().set_user(user.clone())?;
    Ok(Json(user))
}

/// Clear the session user and cart. The wishlist survives.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<StatusCode> {
    state.store().logout()?;
    Ok(StatusCode::NO_CONTENT)
}
