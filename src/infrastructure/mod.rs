//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the upstream billing API and spreadsheet
//! serialization.
//!
//! # Modules
//!
//! - [`upstream`] - reqwest-backed gateway to the Nexudus REST API
//! - [`excel`] - XLSX report rendering

pub mod excel;
pub mod upstream;
