//! gsmc-sem - Semantic Analysis
//!
//! The analyzer walks the AST once, maintaining the flat declared-name
//! scope, and collects every error it finds instead of stopping at the
//! first. The driver consults the result before code generation: IR is
//! emitted only for programs with no semantic errors.
//!
//! Checks performed:
//! - use of an undeclared variable (reference or assignment target)
//! - redeclaration of a variable
//! - assignment to a numeric literal
//! - division by the literal `0`
//!
//! There are no type checks: every expression is an integer and conditions
//! are their own sort, so the parser already keeps them apart.

mod analysis;
mod scope;

pub use analysis::SemanticAnalyzer;
pub use scope::Scope;
