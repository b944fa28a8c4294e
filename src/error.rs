//! Error handling module for the dsmadmc runner.
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the crate should use these types for consistency.

use thiserror::Error;

/// Failure code reported to the host engine for every parameter
/// validation error, before any process is spawned.
pub const VALIDATION_RC: i64 = 256;

/// Main error type for the dsmadmc runner.
#[derive(Error, Debug)]
pub enum ModuleError {
    /// No command text was supplied.
    #[error("no command given")]
    MissingCommand,

    /// Neither `serveraddress` nor its `se` alias was supplied.
    #[error("no serveraddress given")]
    MissingServer,

    /// Both `serveraddress` and `se` were supplied.
    #[error("only serveraddress or se can be given, not both")]
    ConflictingServer,

    /// No administrator user id was supplied.
    #[error("no id given")]
    MissingUserId,

    /// Neither `password` nor its `pa` alias was supplied.
    #[error("no password given")]
    MissingPassword,

    /// Both `password` and `pa` were supplied.
    #[error("only password or pa can be given, not both")]
    ConflictingPassword,

    /// Both members of an optional alias pair were supplied.
    #[error("only {full} or {alias} can be given, not both")]
    ConflictingOption { full: &'static str, alias: &'static str },

    /// The display mode value is outside the accepted set.
    #[error("displaymode must be LISt or TABle, got '{0}'")]
    InvalidDisplayMode(String),

    /// IO errors (parameter file handling).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, ModuleError>;

impl ModuleError {
    /// Conflict error for an optional alias pair, by field names.
    pub fn conflicting_option(full: &'static str, alias: &'static str) -> Self {
        Self::ConflictingOption { full, alias }
    }
}
