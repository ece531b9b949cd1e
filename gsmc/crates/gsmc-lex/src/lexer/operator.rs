//! Operator lexing.
//!
//! Operators are lexed as maximal runs over the special-sign set and then
//! matched against the operator table, so `>=` is one token while an
//! accidental run like `=-` is a single `Unknown` token rather than two
//! operators.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// The special-sign set: `/ % - + ^ * < > = !`.
pub(crate) fn is_special_sign(c: char) -> bool {
    matches!(
        c,
        '/' | '%' | '-' | '+' | '^' | '*' | '<' | '>' | '=' | '!'
    )
}

/// Maps a special-sign run to its operator kind, or `Unknown` if the run is
/// not in the table.
fn operator_kind(text: &str) -> TokenKind {
    match text {
        "=" => TokenKind::Assign,
        "-=" => TokenKind::MinusAssign,
        "+=" => TokenKind::PlusAssign,
        "*=" => TokenKind::StarAssign,
        "/=" => TokenKind::SlashAssign,
        "%=" => TokenKind::PercentAssign,
        "^=" => TokenKind::CaretAssign,
        "==" => TokenKind::EqEq,
        "!=" => TokenKind::NotEq,
        ">" => TokenKind::Gt,
        "<" => TokenKind::Lt,
        ">=" => TokenKind::GtEq,
        "<=" => TokenKind::LtEq,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        "%" => TokenKind::Percent,
        "^" => TokenKind::Caret,
        _ => TokenKind::Unknown,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of special signs against the operator table.
    pub(crate) fn lex_operator(&mut self) -> Token<'a> {
        self.cursor.advance_while(is_special_sign);
        let text = self.cursor.slice_from(self.token_start());
        self.form_token(operator_kind(text))
    }
}
