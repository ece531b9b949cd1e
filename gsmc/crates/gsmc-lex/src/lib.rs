//! gsmc-lex - Lexical Analyzer for the GSM language
//!
//! The lexer transforms a source buffer into a stream of tokens produced on
//! demand. Classification is by maximal runs: a run of letters is a keyword
//! or identifier, a run of digits is a number, and a maximal run of special
//! signs (`/ % - + ^ * < > = !`) is matched against the operator table.
//! Single-character punctuation is handled last.
//!
//! The lexer never fails. Any byte it cannot classify (including a
//! special-sign run that matches no operator, such as `=-`) becomes an
//! [`TokenKind::Unknown`] token, and the parser surfaces the error.
//!
//! Token texts are zero-copy slices of the source buffer; concatenating the
//! texts of all tokens with the skipped whitespace between them reconstructs
//! the input byte for byte.

pub mod cursor;
mod lexer;
mod token;

#[cfg(test)]
mod edge_cases;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
