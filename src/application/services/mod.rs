//! Business logic services for the application layer.

pub mod directory_service;
pub mod report_service;

pub use directory_service::DirectoryService;
pub use report_service::{RenderedReport, ReportService};
