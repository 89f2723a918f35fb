//! HTTP server initialization and runtime setup.
//!
//! Handles upstream client construction, state wiring, and Axum server
//! lifecycle.

use crate::config::Config;
use crate::domain::gateway::BillingGateway;
use crate::infrastructure::upstream::NexudusGateway;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared reqwest client with the bounded upstream timeout
/// - Nexudus gateway and application services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()?;

    let base_url = Url::parse(&config.upstream_base_url)?;
    let gateway: Arc<dyn BillingGateway> = Arc::new(NexudusGateway::new(
        client,
        base_url,
        config.invoice_page_size,
        config.team_page_size,
    ));
    tracing::info!("Upstream gateway ready at {}", config.upstream_base_url);

    let state = AppState::new(gateway);
    let app = app_router(state, &config);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
