//! The semantic analyzer.

use crate::scope::Scope;
use gsmc_par::{
    Assignment, BinOp, Declaration, ElifStmt, Expr, Final, FinalKind, IfStmt,
    IterStmt, Logic, Program, Stmt,
};
use gsmc_util::{DiagnosticBuilder, Handler};

/// Walks the AST, populating the scope from declarations and reporting
/// every semantic error into the shared handler.
///
/// The traversal never aborts: all errors in the program are surfaced in
/// one run, and running it twice over the same AST with fresh analyzers
/// yields identical diagnostics.
pub struct SemanticAnalyzer<'a> {
    /// Declared names.
    scope: Scope<'a>,

    /// Error handler shared with the rest of the pipeline.
    handler: &'a Handler,

    /// Errors reported by this analyzer.
    error_count: usize,
}

impl<'a> SemanticAnalyzer<'a> {
    /// Create a new analyzer.
    pub fn new(handler: &'a Handler) -> Self {
        Self {
            scope: Scope::new(),
            handler,
            error_count: 0,
        }
    }

    /// Check a whole program. Returns true if any error was reported.
    pub fn check(&mut self, program: &Program<'a>) -> bool {
        for stmt in program {
            self.check_stmt(stmt);
        }
        self.has_errors()
    }

    /// Whether this analyzer has reported any error.
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Number of errors reported by this analyzer.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    fn error(&mut self, message: String) {
        self.error_count += 1;
        DiagnosticBuilder::error(message).emit(self.handler);
    }

    fn check_stmt(&mut self, stmt: &Stmt<'a>) {
        match stmt {
            Stmt::Declaration(decl) => self.check_declaration(decl),
            Stmt::Assignment(assign) => self.check_assignment(assign),
            Stmt::If(if_stmt) => self.check_if(if_stmt),
            Stmt::Loop(iter) => self.check_loop(iter),
        }
    }

    /// Declarations introduce names; duplicates are errors. All names are
    /// inserted before the initializers are visited, so an initializer may
    /// reference any name of its own declaration.
    fn check_declaration(&mut self, decl: &Declaration<'a>) {
        for &name in &decl.names {
            if !self.scope.declare(name) {
                self.error(format!("Variable {name} is already declared"));
            }
        }
        for init in &decl.inits {
            self.check_expr(init);
        }
    }

    fn check_assignment(&mut self, assign: &Assignment<'a>) {
        match assign.target.kind {
            FinalKind::Number => {
                self.error("Assignment destination must be an identifier.".to_string());
            },
            FinalKind::Ident => {
                if !self.scope.contains(assign.target.text) {
                    let name = assign.target.text;
                    self.error(format!("Variable {name} is not declared"));
                }
            },
        }
        self.check_expr(&assign.value);
    }

    /// The else body is visited before the elif arms, so diagnostics come
    /// out in that order for programs with errors in both.
    fn check_if(&mut self, if_stmt: &IfStmt<'a>) {
        self.check_logic(&if_stmt.cond);
        for assign in &if_stmt.then_body {
            self.check_assignment(assign);
        }
        for assign in &if_stmt.else_body {
            self.check_assignment(assign);
        }
        for elif in &if_stmt.elifs {
            self.check_elif(elif);
        }
    }

    fn check_elif(&mut self, elif: &ElifStmt<'a>) {
        self.check_logic(&elif.cond);
        for assign in &elif.body {
            self.check_assignment(assign);
        }
    }

    fn check_loop(&mut self, iter: &IterStmt<'a>) {
        self.check_logic(&iter.cond);
        for assign in &iter.body {
            self.check_assignment(assign);
        }
    }

    fn check_logic(&mut self, logic: &Logic<'a>) {
        match logic {
            Logic::Comparison(cmp) => {
                self.check_expr(&cmp.left);
                self.check_expr(&cmp.right);
            },
            Logic::Logical(log) => {
                self.check_logic(&log.left);
                self.check_logic(&log.right);
            },
        }
    }

    fn check_expr(&mut self, expr: &Expr<'a>) {
        match expr {
            Expr::Final(f) => self.check_final(f),
            Expr::Binary(bin) => {
                self.check_expr(&bin.left);
                self.check_expr(&bin.right);

                // Only a literal-zero divisor is rejected statically;
                // non-literal divisors carry no runtime check.
                if bin.op == BinOp::Div {
                    if let Expr::Final(f) = bin.right.as_ref() {
                        if f.kind == FinalKind::Number && f.text == "0" {
                            self.error("Division by zero is not allowed.".to_string());
                        }
                    }
                }
            },
        }
    }

    fn check_final(&mut self, f: &Final<'a>) {
        if f.kind == FinalKind::Ident && !self.scope.contains(f.text) {
            let name = f.text;
            self.error(format!("Variable {name} is not declared"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsmc_lex::Lexer;
    use gsmc_par::Parser;

    fn parse(source: &str) -> Program<'_> {
        let handler = Handler::new();
        let tokens = Lexer::new(source).collect();
        Parser::new(tokens, &handler)
            .parse()
            .expect("test source should parse")
    }

    /// Run the analyzer and return the reported error messages.
    fn check_messages(source: &str) -> Vec<String> {
        let program = parse(source);
        let handler = Handler::new();
        let mut analyzer = SemanticAnalyzer::new(&handler);
        analyzer.check(&program);
        handler
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn test_clean_program() {
        assert!(check_messages("int x = 3; x += 2;").is_empty());
    }

    #[test]
    fn test_undeclared_variable() {
        let messages = check_messages("int x; x = y;");
        assert_eq!(messages, vec!["Variable y is not declared"]);
    }

    #[test]
    fn test_undeclared_assignment_target() {
        let messages = check_messages("y = 1;");
        assert_eq!(messages, vec!["Variable y is not declared"]);
    }

    #[test]
    fn test_redeclaration() {
        let messages = check_messages("int x, x;");
        assert_eq!(messages, vec!["Variable x is already declared"]);
    }

    #[test]
    fn test_redeclaration_across_statements() {
        let messages = check_messages("int x; int x;");
        assert_eq!(messages, vec!["Variable x is already declared"]);
    }

    #[test]
    fn test_number_assignment_target() {
        let messages = check_messages("int x; if x == 1: begin 5 = 3; end");
        assert_eq!(messages, vec!["Assignment destination must be an identifier."]);
    }

    #[test]
    fn test_division_by_literal_zero() {
        let messages = check_messages("int x = 1; x = x / 0;");
        assert_eq!(messages, vec!["Division by zero is not allowed."]);
    }

    #[test]
    fn test_division_by_nonliteral_is_accepted() {
        assert!(check_messages("int x = 1, y = 0; x = x / y;").is_empty());
    }

    #[test]
    fn test_division_by_other_literal_is_accepted() {
        assert!(check_messages("int x = 1; x = x / 2;").is_empty());
    }

    #[test]
    fn test_zero_divisor_in_compound_divide() {
        // `x /= 0` carries the zero on the assignment, not under a division
        // node, so it is accepted; only `/` expressions are checked.
        assert!(check_messages("int x = 1; x /= 0;").is_empty());
    }

    #[test]
    fn test_errors_are_collected_not_fatal() {
        let messages = check_messages("int x, x; x = y; x = x / 0;");
        assert_eq!(
            messages,
            vec![
                "Variable x is already declared",
                "Variable y is not declared",
                "Division by zero is not allowed.",
            ]
        );
    }

    #[test]
    fn test_condition_identifiers_are_checked() {
        let messages =
            check_messages("int x; loopc x < n: begin x += 1; end");
        assert_eq!(messages, vec!["Variable n is not declared"]);
    }

    #[test]
    fn test_elif_and_else_bodies_are_checked() {
        // The else body is visited before the elif arms.
        let messages = check_messages(
            "int x; if x == 1: begin x = 2; end \
             elif x == 2: begin a = 1; end \
             else: begin b = 2; end",
        );
        assert_eq!(
            messages,
            vec![
                "Variable b is not declared",
                "Variable a is not declared",
            ]
        );
    }

    #[test]
    fn test_initializer_may_reference_same_declaration() {
        assert!(check_messages("int a, b = 1, a;").is_empty());
    }

    #[test]
    fn test_idempotent_analysis() {
        let program = parse("int x, x; x = y; int z = w;");

        let first = Handler::new();
        SemanticAnalyzer::new(&first).check(&program);
        let second = Handler::new();
        SemanticAnalyzer::new(&second).check(&program);

        assert_eq!(first.diagnostics(), second.diagnostics());
        assert!(!first.diagnostics().is_empty());
    }

    #[test]
    fn test_declared_set_covers_all_idents_when_clean() {
        // After a clean run, every identifier the program mentions is in
        // the scope the analyzer built.
        let program = parse(
            "int x, y = 1, 2; loopc x < y: begin x += 1; end \
             if x == y: begin y = 0; end",
        );
        let handler = Handler::new();
        let mut analyzer = SemanticAnalyzer::new(&handler);
        assert!(!analyzer.check(&program));
        assert_eq!(analyzer.error_count(), 0);
    }
}
