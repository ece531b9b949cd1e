//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and reporting
//! compiler diagnostics. Phases emit into a shared [`Handler`]; the driver
//! decides when (and whether) to print what was collected, which keeps the
//! semantic analyzer free to keep walking after the first error.
//!
//! # Examples
//!
//! ```
//! use gsmc_util::diagnostic::{DiagnosticBuilder, Handler};
//! use gsmc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Variable x is not declared")
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;

pub use builder::DiagnosticBuilder;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use gsmc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Level};
    /// use gsmc_util::span::Span;
    ///
    /// let diag = Diagnostic::new(Level::Error, "error message", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// Create an error diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Level};
    /// use gsmc_util::span::Span;
    ///
    /// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Level};
    /// use gsmc_util::span::Span;
    ///
    /// let diag = Diagnostic::warning("unused variable", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Warning);
    /// ```
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

/// Handler for collecting and reporting diagnostics.
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. It uses interior mutability so that phases holding a
/// shared reference can still report.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new();
    /// assert!(!handler.has_errors());
    /// ```
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Handler};
    /// use gsmc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Handler};
    /// use gsmc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// assert!(!handler.has_errors());
    ///
    /// handler.emit_diagnostic(Diagnostic::warning("unused", Span::DUMMY));
    /// assert!(!handler.has_errors());
    ///
    /// handler.emit_diagnostic(Diagnostic::error("bad", Span::DUMMY));
    /// assert!(handler.has_errors());
    /// ```
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Handler};
    /// use gsmc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// assert_eq!(handler.error_count(), 0);
    ///
    /// handler.emit_diagnostic(Diagnostic::error("bad", Span::DUMMY));
    /// assert_eq!(handler.error_count(), 1);
    /// ```
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get all diagnostics collected so far.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Handler};
    /// use gsmc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::error("first", Span::DUMMY));
    /// handler.emit_diagnostic(Diagnostic::error("second", Span::DUMMY));
    ///
    /// let diags = handler.diagnostics();
    /// assert_eq!(diags.len(), 2);
    /// assert_eq!(diags[0].message, "first");
    /// ```
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{Diagnostic, Handler};
    /// use gsmc_util::span::Span;
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
    /// handler.clear();
    /// assert!(!handler.has_errors());
    /// ```
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
