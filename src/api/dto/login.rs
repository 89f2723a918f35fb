//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};

/// Credentials to verify against the upstream.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}
