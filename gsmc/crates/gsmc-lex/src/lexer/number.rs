//! Number literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of decimal digits `[0-9]+`.
    ///
    /// The lexer does not validate magnitude; the literal text travels to
    /// later phases unchanged. Negative literals are not in the grammar, so
    /// a leading `-` is never part of a number.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.cursor.advance_while(|c| c.is_ascii_digit());
        self.form_token(TokenKind::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        let mut lexer = Lexer::new("42");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "42");
    }

    #[test]
    fn test_zero_and_leading_zeros() {
        let mut lexer = Lexer::new("0 007");
        assert_eq!(lexer.next_token().text, "0");
        assert_eq!(lexer.next_token().text, "007");
    }

    #[test]
    fn test_magnitude_not_validated() {
        let mut lexer = Lexer::new("99999999999999999999999999");
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "99999999999999999999999999");
    }

    #[test]
    fn test_minus_is_not_part_of_number() {
        let mut lexer = Lexer::new("-3");
        assert_eq!(lexer.next_token().kind, TokenKind::Minus);
        assert_eq!(lexer.next_token().kind, TokenKind::Number);
    }
}
