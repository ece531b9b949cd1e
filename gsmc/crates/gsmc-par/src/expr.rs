//! Expression and condition parsing.
//!
//! Precedence from loosest to tightest: `+ -`, then `* / %`, then `^`
//! (right-associative). Parentheses group inside expressions. Inside a
//! condition, a leading `(` always introduces a nested `logic`; `and` and
//! `or` share a single left-associative level, so mixing them requires
//! explicit parentheses.

use crate::ast::*;
use crate::Parser;
use gsmc_lex::TokenKind;

impl<'a, 'h> Parser<'a, 'h> {
    /// Parse an additive expression: `term (('+'|'-') term)*`.
    pub(crate) fn parse_expr(&mut self) -> Option<Expr<'a>> {
        let mut left = self.parse_term()?;

        while self
            .current()
            .is_one_of(&[TokenKind::Plus, TokenKind::Minus])
        {
            let op = if self.current().is(TokenKind::Plus) {
                BinOp::Add
            } else {
                BinOp::Sub
            };
            self.advance();
            let right = self.parse_term()?;
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Some(left)
    }

    /// Parse a multiplicative expression: `factor (('*'|'/'|'%') factor)*`.
    fn parse_term(&mut self) -> Option<Expr<'a>> {
        let mut left = self.parse_factor()?;

        while self.current().is_one_of(&[
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
        ]) {
            let op = match self.current().kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => BinOp::Mod,
            };
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::Binary(BinaryExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Some(left)
    }

    /// Parse an exponentiation: `final ('^' factor)?`, right-associative.
    fn parse_factor(&mut self) -> Option<Expr<'a>> {
        let left = self.parse_final_expr()?;

        if self.match_token(TokenKind::Caret) {
            let right = self.parse_factor()?;
            return Some(Expr::Binary(BinaryExpr {
                op: BinOp::Pow,
                left: Box::new(left),
                right: Box::new(right),
            }));
        }

        Some(left)
    }

    /// Parse a leaf: number, identifier, or parenthesized expression.
    fn parse_final_expr(&mut self) -> Option<Expr<'a>> {
        let tok = self.current();
        match tok.kind {
            TokenKind::Number => {
                self.advance();
                Some(Expr::Final(Final {
                    kind: FinalKind::Number,
                    text: tok.text,
                }))
            },
            TokenKind::Ident => {
                self.advance();
                Some(Expr::Final(Final {
                    kind: FinalKind::Ident,
                    text: tok.text,
                }))
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Some(inner)
            },
            _ => {
                self.error_at_current();
                None
            },
        }
    }

    /// Parse a condition: `comparison (('and'|'or') comparison)*`.
    pub(crate) fn parse_logic(&mut self) -> Option<Logic<'a>> {
        let mut left = self.parse_comparison()?;

        while self
            .current()
            .is_one_of(&[TokenKind::KwAnd, TokenKind::KwOr])
        {
            let op = if self.current().is(TokenKind::KwAnd) {
                LogicOp::And
            } else {
                LogicOp::Or
            };
            self.advance();
            let right = self.parse_comparison()?;
            left = Logic::Logical(LogicalExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Some(left)
    }

    /// Parse one comparison, or a parenthesized nested condition.
    fn parse_comparison(&mut self) -> Option<Logic<'a>> {
        if self.match_token(TokenKind::LParen) {
            let inner = self.parse_logic()?;
            self.expect(TokenKind::RParen)?;
            return Some(inner);
        }

        let left = self.parse_expr()?;
        let op = match self.current().kind {
            TokenKind::EqEq => CmpOp::Eq,
            TokenKind::NotEq => CmpOp::Ne,
            TokenKind::Gt => CmpOp::Gt,
            TokenKind::Lt => CmpOp::Lt,
            TokenKind::GtEq => CmpOp::Ge,
            TokenKind::LtEq => CmpOp::Le,
            _ => {
                self.error_at_current();
                return None;
            },
        };
        self.advance();
        let right = self.parse_expr()?;

        Some(Logic::Comparison(Comparison { left, right, op }))
    }
}
