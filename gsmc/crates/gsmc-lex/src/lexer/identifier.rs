//! Identifier and keyword lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Maps a letter run to its keyword kind, or `Ident` if it is not reserved.
fn keyword_or_ident(text: &str) -> TokenKind {
    match text {
        "int" => TokenKind::KwInt,
        "if" => TokenKind::KwIf,
        "elif" => TokenKind::KwElif,
        "else" => TokenKind::KwElse,
        "begin" => TokenKind::KwBegin,
        "end" => TokenKind::KwEnd,
        "loopc" => TokenKind::KwLoopc,
        "and" => TokenKind::KwAnd,
        "or" => TokenKind::KwOr,
        _ => TokenKind::Ident,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of letters `[A-Za-z]+` as a keyword or
    /// identifier. Identifiers are letters only; `x1` lexes as `x` then `1`.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        self.cursor.advance_while(|c| c.is_ascii_alphabetic());
        let text = self.cursor.slice_from(self.token_start());
        self.form_token(keyword_or_ident(text))
    }
}
