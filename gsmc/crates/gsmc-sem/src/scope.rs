//! The declared-name scope.
//!
//! GSM has a single flat namespace: one scope for the whole program,
//! populated only by declarations and never re-opened.

use gsmc_util::FxHashSet;

/// The flat set of declared identifier names.
///
/// Names borrow from the source buffer; the scope lives no longer than
/// the AST it was built from.
#[derive(Debug, Default)]
pub struct Scope<'a> {
    names: FxHashSet<&'a str>,
}

impl<'a> Scope<'a> {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self {
            names: FxHashSet::default(),
        }
    }

    /// Declare a name. Returns false if it was already declared.
    pub fn declare(&mut self, name: &'a str) -> bool {
        self.names.insert(name)
    }

    /// Whether the name has been declared.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names have been declared.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
