//! Error types for LLVM code generation.
//!
//! These cover infrastructure failures only. Language-level problems are
//! caught before code generation, except for a non-constant exponent,
//! which is reported as a diagnostic rather than an error value.

use thiserror::Error;

/// Error type for LLVM code generation.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// A variable reference with no stack slot; the analyzer should have
    /// rejected the program.
    #[error("Variable '{0}' has no stack slot")]
    UnknownVariable(String),

    /// A numeric literal that does not fit an integer.
    #[error("Invalid integer literal '{0}'")]
    InvalidLiteral(String),

    /// LLVM operation failed.
    #[error("LLVM operation failed: {0}")]
    LlvmOperationFailed(String),

    /// Internal error - indicates a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for code generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;
