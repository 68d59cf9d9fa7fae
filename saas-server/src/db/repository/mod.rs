//! Repository Module
//!
//! Module-level CRUD functions over the SQLite pool. All queries use
//! positional bind parameters; partial updates use COALESCE so absent DTO
//! fields keep their stored values.

// Platform
pub mod blog_post;
pub mod pricing_package;
pub mod tenant;
pub mod user;

// Tenant settings
pub mod company_settings;
pub mod system_setting;

// Menu
pub mod menu_category;
pub mod menu_item;

// Front of house
pub mod reservation;
pub mod restaurant_table;

// Sales
pub mod customer;
pub mod order;

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
