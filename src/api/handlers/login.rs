//! Handler for the login endpoint.

use axum::{Json, extract::State};

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies caller credentials against the upstream.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "password": "secret" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed credentials, 401 Unauthorized when
/// the upstream refuses them, 502 Bad Gateway when it is unreachable.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    state
        .directory_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
    }))
}
