//! Token definitions for the GSM language.

use gsmc_util::Span;

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input
    Eoi,
    /// Unclassifiable input; rejected by the parser
    Unknown,
    /// Identifier (a run of letters that is not a keyword)
    Ident,
    /// Integer literal (a run of decimal digits)
    Number,

    // Assignment family
    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,
    /// `%=`
    PercentAssign,
    /// `^=`
    CaretAssign,

    // Comparison family
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    GtEq,
    /// `<=`
    LtEq,

    // Punctuation
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `^`
    Caret,

    // Keywords
    /// `int`
    KwInt,
    /// `if`
    KwIf,
    /// `elif`
    KwElif,
    /// `else`
    KwElse,
    /// `begin`
    KwBegin,
    /// `end`
    KwEnd,
    /// `loopc`
    KwLoopc,
    /// `and`
    KwAnd,
    /// `or`
    KwOr,
}

/// A lexical token: a kind, the source text it covers, and its location.
///
/// `text` borrows from the original source buffer, so tokens are free to
/// produce and cheap to copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    /// The token's classification.
    pub kind: TokenKind,
    /// The exact source text of the token.
    pub text: &'a str,
    /// Where the token sits in the source buffer.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Tests whether the token is of the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Tests whether the token is any of the given kinds.
    #[inline]
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
