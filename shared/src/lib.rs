//! Shared types for the Ladle platform
//!
//! Common types used across crates: API models, client DTOs, and
//! utility functions.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
