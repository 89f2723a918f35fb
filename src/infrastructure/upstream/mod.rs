//! Upstream gateway implementations.

pub mod nexudus;

pub use nexudus::NexudusGateway;
