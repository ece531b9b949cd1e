//! Lexer edge cases and the lexing round-trip property.

use crate::{Lexer, TokenKind};
use proptest::prelude::*;

/// Reassembles a source string from its token texts and the whitespace
/// gaps between their spans, asserting that every gap really is skipped
/// whitespace. Returns the reconstruction.
fn reassemble(source: &str) -> String {
    let mut rebuilt = String::new();
    let mut prev_end = 0;

    let mut lexer = Lexer::new(source);
    loop {
        let tok = lexer.next_token();
        let gap = &source[prev_end..tok.span.start];
        assert!(
            gap.chars()
                .all(|c| matches!(c, ' ' | '\t' | '\x0C' | '\x0B' | '\r' | '\n')),
            "non-whitespace gap {gap:?} before token {tok:?}"
        );
        rebuilt.push_str(gap);
        rebuilt.push_str(tok.text);
        prev_end = tok.span.end;

        if tok.kind == TokenKind::Eoi {
            break;
        }
    }

    rebuilt.push_str(&source[prev_end..]);
    rebuilt
}

#[test]
fn round_trip_simple_program() {
    let source = "int x = 3;\nx += 2;\nif x == 5: begin x = 7; end";
    assert_eq!(reassemble(source), source);
}

#[test]
fn round_trip_with_unknown_runs() {
    let source = "x =- 3; @ y !! z";
    assert_eq!(reassemble(source), source);
}

#[test]
fn round_trip_empty_and_whitespace() {
    assert_eq!(reassemble(""), "");
    assert_eq!(reassemble(" \t\r\n"), " \t\r\n");
}

proptest! {
    /// Lexing round-trip: for any source, concatenating token texts in
    /// order with the intervening skipped whitespace reconstructs the
    /// original byte sequence.
    #[test]
    fn round_trip_arbitrary_ascii(source in "[ -~\t\r\n]{0,200}") {
        prop_assert_eq!(reassemble(&source), source);
    }

    /// Token spans never overlap and always advance.
    #[test]
    fn spans_are_monotone(source in "[ -~\t\r\n]{0,200}") {
        let mut prev_end = 0;
        for tok in Lexer::new(&source) {
            prop_assert!(tok.span.start >= prev_end);
            prop_assert!(tok.span.end > tok.span.start);
            prev_end = tok.span.end;
        }
    }
}

#[test]
fn all_statement_forms_lex() {
    let source = "int a, b = 1, 2; a ^= 2; loopc a > 0 and b < 9: begin \
                  a -= 1; b *= 2; end if (a == 0) or (b >= 8): begin b = 0; end \
                  else: begin b %= 3; end";
    let kinds: Vec<TokenKind> = Lexer::new(source).map(|t| t.kind).collect();
    assert!(!kinds.contains(&TokenKind::Unknown));
    assert!(kinds.contains(&TokenKind::KwLoopc));
    assert!(kinds.contains(&TokenKind::CaretAssign));
    assert!(kinds.contains(&TokenKind::KwOr));
}
