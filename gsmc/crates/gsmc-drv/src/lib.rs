//! gsmc-drv - Compiler Driver
//!
//! Orchestrates the pipeline on one in-memory source string:
//!
//! ```text
//! Source
//!    │
//!    ▼
//! [Lexer] ──▶ Token stream
//!    │
//!    ▼
//! [Parser] ──▶ AST            (syntax error: stop, print diagnostics)
//!    │
//!    ▼
//! [Semantic Analyzer]         (any error: stop, print diagnostics)
//!    │
//!    ▼
//! [Code Generator] ──▶ LLVM module text on stdout
//! ```
//!
//! Diagnostics from every phase land in one [`Handler`] and are printed to
//! standard error, one message per line. A diagnosed program is a completed
//! run: the process still exits 0, it just prints no module (except for the
//! non-constant-exponent report, which accompanies a completed module).

use gsmc_gen::{CodeGenError, IrGen};
use gsmc_lex::{Lexer, Token};
use gsmc_par::Parser;
use gsmc_sem::SemanticAnalyzer;
use gsmc_util::Handler;
use inkwell::context::Context;

/// One compiler invocation: a diagnostic handler plus the pipeline.
pub struct Session {
    handler: Handler,
}

impl Session {
    /// Create a new session.
    pub fn new() -> Self {
        Self {
            handler: Handler::new(),
        }
    }

    /// The session's diagnostic handler.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Run the pipeline on one source string.
    ///
    /// Returns `Ok(Some(ir))` when a module was produced, `Ok(None)` when a
    /// syntax or semantic error stopped the pipeline (the diagnostics are in
    /// the handler), and `Err` only for code generator infrastructure
    /// failures.
    pub fn compile(&self, source: &str) -> Result<Option<String>, CodeGenError> {
        let tokens: Vec<Token<'_>> = Lexer::new(source).collect();

        let program = match Parser::new(tokens, &self.handler).parse() {
            Some(program) => program,
            None => return Ok(None),
        };

        if SemanticAnalyzer::new(&self.handler).check(&program) {
            return Ok(None);
        }

        let context = Context::create();
        let mut gen = IrGen::new(&context, &self.handler);
        gen.compile(&program)?;
        Ok(Some(gen.emit_ir()))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile `source`, printing diagnostics to standard error and the module
/// (if any) to standard output.
pub fn run(source: &str) -> Result<(), CodeGenError> {
    let session = Session::new();
    let ir = session.compile(source)?;

    for diag in session.handler().diagnostics() {
        eprintln!("{}", diag.message);
    }
    if let Some(ir) = ir {
        print!("{ir}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_program_produces_module() {
        let session = Session::new();
        let ir = session
            .compile("int x = 3; x += 2;")
            .expect("no infrastructure error")
            .expect("module should be produced");
        assert!(ir.contains("define i32 @main"));
        assert!(ir.contains("declare void @gsm_write(i32)"));
        assert!(!session.handler().has_errors());
    }

    #[test]
    fn test_syntax_error_stops_pipeline() {
        let session = Session::new();
        let ir = session.compile("int x = ;").expect("no infrastructure error");
        assert!(ir.is_none());
        assert!(session.handler().has_errors());
    }

    #[test]
    fn test_semantic_error_stops_pipeline() {
        let session = Session::new();
        let ir = session.compile("int x; x = y;").expect("no infrastructure error");
        assert!(ir.is_none());
        let messages: Vec<String> = session
            .handler()
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["Variable y is not declared"]);
    }

    #[test]
    fn test_all_semantic_errors_surface_in_one_run() {
        let session = Session::new();
        session
            .compile("int x, x; x = y; x = x / 0;")
            .expect("no infrastructure error");
        assert_eq!(session.handler().error_count(), 3);
    }

    #[test]
    fn test_empty_source_is_an_empty_module() {
        let session = Session::new();
        let ir = session
            .compile("")
            .expect("no infrastructure error")
            .expect("module should be produced");
        assert!(ir.contains("ret i32 0"));
    }
}
