//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use gsmc_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Whitespace is skipped between tokens: space, tab, form feed, vertical
/// tab, carriage return, line feed.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C' | '\x0B' | '\r' | '\n')
}

/// Lexer for the GSM language.
///
/// Produces tokens one at a time via [`Lexer::next_token`], or as an
/// iterator that stops at end of input. The lexer never reports errors:
/// unclassifiable input becomes [`TokenKind::Unknown`] tokens.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, then dispatches on the current character:
    /// letter runs, digit runs, special-sign runs, punctuation. At end of
    /// input an `Eoi` token with empty text is returned, and every
    /// subsequent call returns `Eoi` again.
    pub fn next_token(&mut self) -> Token<'a> {
        self.cursor.advance_while(is_whitespace);

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.form_token(TokenKind::Eoi);
        }

        let c = self.cursor.current_char();

        if c.is_ascii_alphabetic() {
            return self.lex_identifier();
        }
        if c.is_ascii_digit() {
            return self.lex_number();
        }
        if crate::lexer::operator::is_special_sign(c) {
            return self.lex_operator();
        }

        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ';' => self.single(TokenKind::Semicolon),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            _ => self.single(TokenKind::Unknown),
        }
    }

    /// Consumes one character and forms a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.form_token(kind)
    }

    /// Forms a token covering `token_start..position`.
    pub(crate) fn form_token(&self, kind: TokenKind) -> Token<'a> {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// Starting byte offset of the token currently being formed.
    pub(crate) fn token_start(&self) -> usize {
        self.token_start
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eoi {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Eoi);
        assert_eq!(tok.text, "");
    }

    #[test]
    fn test_eoi_is_sticky() {
        let mut lexer = Lexer::new("x");
        lexer.next_token();
        assert_eq!(lexer.next_token().kind, TokenKind::Eoi);
        assert_eq!(lexer.next_token().kind, TokenKind::Eoi);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds(" \t\r\n\x0B\x0C"), vec![]);
    }

    #[test]
    fn test_declaration_tokens() {
        assert_eq!(
            kinds("int x = 3;"),
            vec![
                TokenKind::KwInt,
                TokenKind::Ident,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_loop_header_tokens() {
        assert_eq!(
            kinds("loopc i < 3: begin"),
            vec![
                TokenKind::KwLoopc,
                TokenKind::Ident,
                TokenKind::Lt,
                TokenKind::Number,
                TokenKind::Colon,
                TokenKind::KwBegin,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("(),;:"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let mut lexer = Lexer::new("@");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Unknown);
        assert_eq!(tok.text, "@");
    }

    #[test]
    fn test_unknown_non_ascii() {
        let mut lexer = Lexer::new("λ x");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Unknown);
        assert_eq!(tok.text, "λ");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_spans_cover_text() {
        let source = "int  x\n= 42 ;";
        let lexer = Lexer::new(source);
        for tok in lexer {
            assert_eq!(&source[tok.span.start..tok.span.end], tok.text);
        }
    }

    #[test]
    fn test_line_column_of_tokens() {
        let mut lexer = Lexer::new("x\n  y");
        let x = lexer.next_token();
        assert_eq!((x.span.line, x.span.column), (1, 1));
        let y = lexer.next_token();
        assert_eq!((y.span.line, y.span.column), (2, 3));
    }
}
