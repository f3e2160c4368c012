//! Core error types for the deal warehouse.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::currencies::CurrencyLoadError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the deal warehouse.
///
/// The deal rejection kinds are flat variants so callers can match on them
/// directly. Each of them displays exactly the message it carries.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or blank currency code, or identical currency pair.
    #[error("{0}")]
    InvalidCurrency(String),

    /// Well-formed currency code absent from the reference set.
    #[error("{0}")]
    UnknownCurrency(String),

    /// A deal with the same identifier is already stored.
    #[error("{0}")]
    DuplicateDeal(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Failed to load currency reference data: {0}")]
    ReferenceData(#[from] CurrencyLoadError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Class-like name of the error, used when reporting unexpected failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidCurrency(_) => "InvalidCurrency",
            Error::UnknownCurrency(_) => "UnknownCurrency",
            Error::DuplicateDeal(_) => "DuplicateDeal",
            Error::Database(e) => e.kind(),
            Error::ReferenceData(_) => "ReferenceDataLoadError",
            Error::Unexpected(_) => "UnexpectedError",
        }
    }

    /// True for failures the caller can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCurrency(_) | Error::UnknownCurrency(_) | Error::DuplicateDeal(_)
        )
    }
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DatabaseError {
    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseError::ConnectionFailed(_) => "ConnectionFailed",
            DatabaseError::PoolCreationFailed(_) => "PoolCreationFailed",
            DatabaseError::QueryFailed(_) => "QueryFailed",
            DatabaseError::NotFound(_) => "NotFound",
            DatabaseError::UniqueViolation(_) => "UniqueViolation",
            DatabaseError::MigrationFailed(_) => "MigrationFailed",
            DatabaseError::Internal(_) => "StorageError",
        }
    }
}
