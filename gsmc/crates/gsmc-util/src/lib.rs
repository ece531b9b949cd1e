//! gsmc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the GSM compiler phases: source spans,
//! diagnostic collection, and the hash types every phase uses.
//!
//! The compiler is a strictly sequential pipeline, so there is no
//! synchronization here; a [`Handler`] is shared by reference within a
//! single compilation and collects diagnostics via interior mutability.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::{FileId, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
