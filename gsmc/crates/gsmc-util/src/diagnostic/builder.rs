//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, Level};
use crate::span::Span;

/// Builder for constructing diagnostics with a fluent API.
///
/// # Examples
///
/// ```
/// use gsmc_util::diagnostic::{DiagnosticBuilder, Level};
/// use gsmc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected token")
///     .span(Span::new(0, 1, 1, 1))
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{DiagnosticBuilder, Level};
    ///
    /// let builder = DiagnosticBuilder::new(Level::Error, "something went wrong");
    /// assert_eq!(builder.build().level, Level::Error);
    /// ```
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
        }
    }

    /// Create an error builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{DiagnosticBuilder, Level};
    ///
    /// let diag = DiagnosticBuilder::error("unexpected token").build();
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{DiagnosticBuilder, Level};
    ///
    /// let diag = DiagnosticBuilder::warning("unused variable").build();
    /// assert_eq!(diag.level, Level::Warning);
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the source span.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::DiagnosticBuilder;
    /// use gsmc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// let diag = DiagnosticBuilder::error("error here").span(span).build();
    /// assert_eq!(diag.span, span);
    /// ```
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::DiagnosticBuilder;
    ///
    /// let diag = DiagnosticBuilder::error("something went wrong").build();
    /// assert_eq!(diag.message, "something went wrong");
    /// ```
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
        }
    }

    /// Build and emit the diagnostic to the given handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use gsmc_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong").emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Handler;

    #[test]
    fn test_builder_error() {
        let diag = DiagnosticBuilder::error("test error").build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test error");
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_builder_warning() {
        let diag = DiagnosticBuilder::warning("test warning").build();
        assert_eq!(diag.level, Level::Warning);
    }

    #[test]
    fn test_builder_span() {
        let span = Span::new(3, 7, 1, 4);
        let diag = DiagnosticBuilder::error("spanned").span(span).build();
        assert_eq!(diag.span, span);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("test error").emit(&handler);

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}
