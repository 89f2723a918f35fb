//! # Invoice Reporter
//!
//! Invoice aggregation and Excel report backend for Nexudus-managed
//! workspaces, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, validation, and the
//!   upstream gateway trait
//! - **Application Layer** ([`application`]) - Pipeline orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Nexudus REST gateway
//!   and XLSX rendering
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Multi-month invoice aggregation with deterministic ordering
//! - Fail-fast fetching: a report never silently omits a month's data
//! - In-memory XLSX generation with the report header style finance staff
//!   key off
//! - Per-request credentials, never cached process-wide
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a development default; override as needed
//! export UPSTREAM_BASE_URL="https://spaces.nexudus.com/api/"
//! export LISTEN="0.0.0.0:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DirectoryService, RenderedReport, ReportService};
    pub use crate::domain::{Credentials, InvoiceRecord, Period, PeriodSelection, ReportError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
