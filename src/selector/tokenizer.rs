//! logos-based selector tokenizer.
//!
//! Whitespace is skipped; the parser recovers descendant combinators from the
//! byte spans of adjacent tokens.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Identifier: tag names, ids, classes, attribute names. Any non-ASCII
    /// character counts as a name character.
    #[regex(r"-?[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}-]*")]
    Ident,

    /// `#`
    #[token("#")]
    Hash,

    /// `.`
    #[token(".")]
    Dot,

    /// `*`
    #[token("*")]
    Star,

    /// `>`
    #[token(">")]
    GreaterThan,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `=`
    #[token("=")]
    Equals,
}

/// A lexed token with its source text and byte span.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub text: String,
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Tokenize a selector string.
///
/// Returns `Err(offset)` with the byte offset of the first character the lexer
/// could not recognize.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, usize> {
    let lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    for (result, span) in lexer.spanned() {
        match result {
            Ok(token) => tokens.push(SpannedToken {
                token,
                text: input[span.clone()].to_string(),
                byte_start: span.start,
                byte_end: span.end,
            }),
            Err(()) => return Err(span.start),
        }
    }
    Ok(tokens)
}
