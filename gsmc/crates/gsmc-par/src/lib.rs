//! gsmc-par - Parser (Syntactic Analyzer)
//!
//! An LL(1) recursive-descent parser over the token stream, building the
//! tagged AST in [`ast`]. Each non-terminal has a parse method; operator
//! repetition is handled by iteration so the grammar stays free of left
//! recursion.
//!
//! ```ebnf
//! program    = { stmt } Eoi ;
//! stmt       = decl | assign ";" | if | loopc ;
//! decl       = "int" ident { "," ident } [ "=" expr { "," expr } ] ";" ;
//! assign     = final assignOp expr ;
//! expr       = term { ("+" | "-") term } ;
//! term       = factor { ("*" | "/" | "%") factor } ;
//! factor     = final [ "^" factor ] ;            (* right-assoc *)
//! final      = number | ident | "(" expr ")" ;
//! logic      = comparison { ("and" | "or") comparison } ;
//! comparison = "(" logic ")" | expr cmpOp expr ;
//! if         = "if" logic ":" "begin" { assign ";" } "end"
//!              { "elif" logic ":" "begin" { assign ";" } "end" }
//!              [ "else" ":" "begin" { assign ";" } "end" ] ;
//! loopc      = "loopc" logic ":" "begin" { assign ";" } "end" ;
//! ```
//!
//! # Error strategy
//!
//! On any mismatch the parser reports a diagnostic and enters panic mode:
//! the remaining tokens are discarded up to end of input and [`Parser::parse`]
//! returns `None` for the whole program. There is no statement-level
//! resynchronization; the language is small enough that the first syntax
//! error invalidates the run.

pub mod ast;

mod expr;
mod stmt;

#[cfg(test)]
mod edge_cases;

pub use ast::*;

use gsmc_lex::{Token, TokenKind};
use gsmc_util::{DiagnosticBuilder, Handler, Span};

/// Recursive descent parser.
///
/// `'a` is the source buffer the tokens (and the produced AST) borrow
/// from; the handler borrow is independent, so the AST outlives the
/// parser and its handler.
pub struct Parser<'a, 'h> {
    /// Token stream from the lexer (without the trailing `Eoi`).
    tokens: Vec<Token<'a>>,

    /// Current position in the token stream.
    position: usize,

    /// Error handler shared with the rest of the pipeline.
    handler: &'h Handler,
}

impl<'a, 'h> Parser<'a, 'h> {
    /// Create a new parser from tokens.
    pub fn new(tokens: Vec<Token<'a>>, handler: &'h Handler) -> Self {
        Self {
            tokens,
            position: 0,
            handler,
        }
    }

    /// Parse a complete program.
    ///
    /// Returns `None` if any production failed; in that case at least one
    /// diagnostic has been reported and the token stream is drained.
    pub fn parse(&mut self) -> Option<Program<'a>> {
        let mut stmts = Vec::new();

        while !self.current().is(TokenKind::Eoi) {
            match self.parse_stmt() {
                Some(stmt) => stmts.push(stmt),
                None => {
                    self.recover_to_eoi();
                    return None;
                },
            }
        }

        Some(stmts)
    }

    /// Parse a single statement, dispatching on the first token.
    fn parse_stmt(&mut self) -> Option<Stmt<'a>> {
        match self.current().kind {
            TokenKind::KwInt => self.parse_decl().map(Stmt::Declaration),
            TokenKind::Ident => {
                let assign = self.parse_assign()?;
                self.expect(TokenKind::Semicolon)?;
                Some(Stmt::Assignment(assign))
            },
            TokenKind::KwIf => self.parse_if().map(Stmt::If),
            TokenKind::KwLoopc => self.parse_loopc().map(Stmt::Loop),
            _ => {
                self.error_at_current();
                None
            },
        }
    }

    /// Get the current token, or `Eoi` past the end of the stream.
    fn current(&self) -> Token<'a> {
        self.tokens
            .get(self.position)
            .copied()
            .unwrap_or(Token::new(TokenKind::Eoi, "", Span::DUMMY))
    }

    /// Advance to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Expect and consume a specific token kind, reporting an error on
    /// mismatch.
    fn expect(&mut self, expected: TokenKind) -> Option<()> {
        if self.current().is(expected) {
            self.advance();
            Some(())
        } else {
            self.error_at_current();
            None
        }
    }

    /// Consume the current token if it matches.
    fn match_token(&mut self, expected: TokenKind) -> bool {
        if self.current().is(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect an identifier and return its text.
    fn expect_ident(&mut self) -> Option<&'a str> {
        let tok = self.current();
        if tok.is(TokenKind::Ident) {
            self.advance();
            Some(tok.text)
        } else {
            self.error_at_current();
            None
        }
    }

    /// Report a syntax error at the current token.
    fn error_at_current(&self) {
        let tok = self.current();
        let message = if tok.is(TokenKind::Eoi) {
            "syntax error: unexpected end of input".to_string()
        } else {
            format!("syntax error: unexpected token `{}`", tok.text)
        };
        DiagnosticBuilder::error(message)
            .span(tok.span)
            .emit(self.handler);
    }

    /// Panic mode: discard tokens until end of input.
    fn recover_to_eoi(&mut self) {
        self.position = self.tokens.len();
    }
}
