//! Statement parsing - declarations, assignments, if, loopc.

use crate::ast::*;
use crate::Parser;
use gsmc_lex::TokenKind;

impl<'a, 'h> Parser<'a, 'h> {
    /// Parse a declaration:
    /// `'int' ident (',' ident)* ('=' expr (',' expr)*)? ';'`.
    ///
    /// Initializers align with identifiers left-to-right; supplying more
    /// initializers than identifiers is a parse error, fewer is legal.
    pub(crate) fn parse_decl(&mut self) -> Option<Declaration<'a>> {
        self.expect(TokenKind::KwInt)?;

        let mut names = Vec::new();
        names.push(self.expect_ident()?);
        while self.match_token(TokenKind::Comma) {
            names.push(self.expect_ident()?);
        }

        let mut inits = Vec::new();
        if self.match_token(TokenKind::Assign) {
            inits.push(self.parse_expr()?);
            while self.match_token(TokenKind::Comma) {
                if inits.len() == names.len() {
                    self.error_at_current();
                    return None;
                }
                inits.push(self.parse_expr()?);
            }
        }

        self.expect(TokenKind::Semicolon)?;

        Some(Declaration { names, inits })
    }

    /// Parse an assignment: `final assignOp expr`.
    ///
    /// The trailing `;` belongs to the caller (top level and block bodies
    /// both require it). The target may lex as a number; semantic analysis
    /// rejects that with its own diagnostic.
    pub(crate) fn parse_assign(&mut self) -> Option<Assignment<'a>> {
        let tok = self.current();
        let target = match tok.kind {
            TokenKind::Ident => Final {
                kind: FinalKind::Ident,
                text: tok.text,
            },
            TokenKind::Number => Final {
                kind: FinalKind::Number,
                text: tok.text,
            },
            _ => {
                self.error_at_current();
                return None;
            },
        };
        self.advance();

        let op = match self.current().kind {
            TokenKind::Assign => AssignOp::Assign,
            TokenKind::PlusAssign => AssignOp::AddAssign,
            TokenKind::MinusAssign => AssignOp::SubAssign,
            TokenKind::StarAssign => AssignOp::MulAssign,
            TokenKind::SlashAssign => AssignOp::DivAssign,
            TokenKind::PercentAssign => AssignOp::ModAssign,
            TokenKind::CaretAssign => AssignOp::PowAssign,
            _ => {
                self.error_at_current();
                return None;
            },
        };
        self.advance();

        let value = self.parse_expr()?;

        Some(Assignment { target, op, value })
    }

    /// Parse an if statement with its `elif` chain and optional `else`.
    pub(crate) fn parse_if(&mut self) -> Option<IfStmt<'a>> {
        self.expect(TokenKind::KwIf)?;
        let cond = self.parse_logic()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::KwBegin)?;
        let then_body = self.parse_body()?;

        let mut elifs = Vec::new();
        while self.match_token(TokenKind::KwElif) {
            let cond = self.parse_logic()?;
            self.expect(TokenKind::Colon)?;
            self.expect(TokenKind::KwBegin)?;
            let body = self.parse_body()?;
            elifs.push(ElifStmt { cond, body });
        }

        let mut else_body = Vec::new();
        if self.match_token(TokenKind::KwElse) {
            self.expect(TokenKind::Colon)?;
            self.expect(TokenKind::KwBegin)?;
            else_body = self.parse_body()?;
        }

        Some(IfStmt {
            cond,
            then_body,
            elifs,
            else_body,
        })
    }

    /// Parse a loopc statement.
    pub(crate) fn parse_loopc(&mut self) -> Option<IterStmt<'a>> {
        self.expect(TokenKind::KwLoopc)?;
        let cond = self.parse_logic()?;
        self.expect(TokenKind::Colon)?;
        self.expect(TokenKind::KwBegin)?;
        let body = self.parse_body()?;

        Some(IterStmt { cond, body })
    }

    /// Parse a block body `(assign ';')* 'end'`, consuming the `end`.
    ///
    /// Bodies hold assignments only; nested control flow is a syntax error
    /// surfaced by `parse_assign`.
    fn parse_body(&mut self) -> Option<Vec<Assignment<'a>>> {
        let mut body = Vec::new();

        while !self.current().is(TokenKind::KwEnd) {
            if self.current().is(TokenKind::Eoi) {
                self.error_at_current();
                return None;
            }
            let assign = self.parse_assign()?;
            self.expect(TokenKind::Semicolon)?;
            body.push(assign);
        }
        self.advance();

        Some(body)
    }
}
