//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! None. Every variable has a default suitable for local development.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_BASE_URL` - Nexudus API root
//!   (default: `https://spaces.nexudus.com/api/`)
//! - `UPSTREAM_TIMEOUT_SECS` - Per-request timeout (default: 10)
//! - `INVOICE_PAGE_SIZE` - Invoice page size per period query (default: 25)
//! - `TEAM_PAGE_SIZE` - Team listing page size (default: 100)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origin allowlist, or `*`
//!   (default: `*`)

use anyhow::Result;
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upstream API root. Normalized to end with a slash so relative
    /// endpoint joins resolve under it.
    pub upstream_base_url: String,
    /// Bounded timeout applied to every outbound call; a timeout is treated
    /// as a transport failure and never retried.
    pub upstream_timeout_secs: u64,
    pub invoice_page_size: u32,
    pub team_page_size: u32,
    /// Origins allowed by the CORS layer; `["*"]` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let mut upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "https://spaces.nexudus.com/api/".to_string());
        if !upstream_base_url.ends_with('/') {
            upstream_base_url.push('/');
        }

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let invoice_page_size = env::var("INVOICE_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(25);

        let team_page_size = env::var("TEAM_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            listen_addr,
            log_level,
            log_format,
            upstream_base_url,
            upstream_timeout_secs,
            invoice_page_size,
            team_page_size,
            cors_allowed_origins,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `UPSTREAM_BASE_URL` is not an absolute http(s) URL
    /// - timeout or page sizes are zero (or page sizes exceed 1000)
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let url = Url::parse(&self.upstream_base_url).map_err(|e| {
            anyhow::anyhow!(
                "UPSTREAM_BASE_URL is not a valid URL ('{}'): {e}",
                self.upstream_base_url
            )
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "UPSTREAM_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.upstream_base_url
            );
        }

        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than 0");
        }

        if self.invoice_page_size == 0 || self.invoice_page_size > 1000 {
            anyhow::bail!(
                "INVOICE_PAGE_SIZE must be between 1 and 1000, got {}",
                self.invoice_page_size
            );
        }

        if self.team_page_size == 0 || self.team_page_size > 1000 {
            anyhow::bail!(
                "TEAM_PAGE_SIZE must be between 1 and 1000, got {}",
                self.team_page_size
            );
        }

        if self.cors_allowed_origins.is_empty() {
            anyhow::bail!("CORS_ALLOWED_ORIGINS must name at least one origin or '*'");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_base_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!(
            "  Page sizes: invoices={}, teams={}",
            self.invoice_page_size,
            self.team_page_size
        );
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
