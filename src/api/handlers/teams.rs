//! Handler for the team directory endpoint.

use axum::{Json, extract::State, http::HeaderMap};
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::AppState;

/// Lists the workspace's teams, passing the upstream payload through.
///
/// # Endpoint
///
/// `GET /api/teams`
///
/// Credentials arrive in `username` / `password` headers; they are used for
/// this one upstream call and dropped.
///
/// # Errors
///
/// Returns 400 Bad Request when a credential header is missing or malformed,
/// 502 Bad Gateway when the upstream refuses or is unreachable.
pub async fn teams_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let email = header_value(&headers, "username")?;
    let password = header_value(&headers, "password")?;

    let teams = state.directory_service.teams(email, password).await?;

    Ok(Json(teams))
}

fn header_value<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, AppError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::bad_request(
                format!("Missing or invalid '{name}' header"),
                json!({ "header": name }),
            )
        })
}
