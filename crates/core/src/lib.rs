//! Deal Warehouse Core - Domain entities, services, and traits.
//!
//! This crate contains the deal validation and ingestion logic.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod currencies;
pub mod deals;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
