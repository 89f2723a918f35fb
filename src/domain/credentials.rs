//! Per-request upstream credentials.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

use crate::domain::error::ReportError;

/// Validated upstream credentials for a single pipeline invocation.
///
/// Constructed fresh per request and dropped when the request completes;
/// never cached process-wide. Validation here checks well-formedness only:
/// the credentials are verified against the upstream the first time a
/// request is actually issued.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validates and builds credentials from raw caller input.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidCredentials`] if either value is empty
    /// or the email contains no `@`.
    pub fn parse(email: &str, password: &str) -> Result<Self, ReportError> {
        if email.is_empty() || password.is_empty() {
            return Err(ReportError::InvalidCredentials(
                "email and password are required",
            ));
        }

        if !email.contains('@') {
            return Err(ReportError::InvalidCredentials(
                "a valid email address is required",
            ));
        }

        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    /// The account email, for log context.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Encodes the pair into an HTTP Basic `Authorization` header value.
    ///
    /// Pure and infallible for any validated pair.
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.email, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    // Keeps the password out of logs and panic messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
