//! Error types for the matchmaking and progression engine
//!
//! This module defines error types using anyhow for consistent error
//! handling throughout the crate.
//!
//! Expected "no result" conditions (a pool too small to balance, an empty
//! map candidate set, an undecided winner) are not errors: they are
//! encoded in return shapes (empty assignment, `None`) that the caller
//! must branch on.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for engine configuration
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
