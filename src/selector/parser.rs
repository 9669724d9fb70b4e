//! Recursive descent selector parser.

use super::model::*;
use super::tokenizer::{tokenize, SpannedToken, Token};

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unrecognized character at byte {0}")]
    InvalidCharacter(usize),
    #[error("unexpected token at byte {offset}: {message}")]
    UnexpectedToken { offset: usize, message: String },
    #[error("unexpected end of selector: {0}")]
    UnexpectedEof(String),
}

/// Parse a selector such as `.navbar-nav .nav-link` or `a[href="#about"]`.
pub fn parse_selector(input: &str) -> Result<Selector, SelectorError> {
    let tokens = tokenize(input).map_err(SelectorError::InvalidCharacter)?;
    if tokens.is_empty() {
        return Err(SelectorError::Empty);
    }

    let mut parser = Parser { tokens, cursor: 0 };
    let selector = parser.parse_selector()?;
    match parser.peek() {
        None => Ok(selector),
        Some(tok) => Err(parser.unexpected(tok.clone(), "end of selector")),
    }
}

struct Parser {
    tokens: Vec<SpannedToken>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    /// Whether the current token touches the previous one (no whitespace).
    fn is_adjacent(&self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = &self.tokens[self.cursor - 1];
        self.peek().is_some_and(|curr| curr.byte_start == prev.byte_end)
    }

    fn unexpected(&self, tok: SpannedToken, expected: &str) -> SelectorError {
        SelectorError::UnexpectedToken {
            offset: tok.byte_start,
            message: format!("expected {expected}, got {:?} '{}'", tok.token, tok.text),
        }
    }

    /// Consume an identifier, or fail naming what it was meant to be.
    fn expect_ident(&mut self, what: &str) -> Result<String, SelectorError> {
        match self.advance() {
            Some(tok) if tok.token == Token::Ident => Ok(tok.text),
            Some(tok) => Err(self.unexpected(tok, what)),
            None => Err(SelectorError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    fn parse_selector(&mut self) -> Result<Selector, SelectorError> {
        let mut parts = vec![SelectorPart::Compound(self.parse_compound()?)];

        loop {
            match self.peek() {
                Some(t) if t.token == Token::GreaterThan => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound()?));
                }
                // A selector-starting token after whitespace opens a descendant
                // compound; an adjacent one would have been consumed already.
                Some(t)
                    if matches!(
                        t.token,
                        Token::Ident
                            | Token::Star
                            | Token::Hash
                            | Token::Dot
                            | Token::BracketOpen
                    ) =>
                {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound()?));
                }
                _ => break,
            }
        }

        Ok(Selector { parts })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut compound = CompoundSelector::new();

        match self.peek().map(|t| t.token.clone()) {
            Some(Token::Ident) => {
                let name = self.expect_ident("tag name")?;
                compound.push(SimpleSelector::Type(name.to_ascii_lowercase()));
            }
            Some(Token::Star) => {
                self.advance();
                compound.push(SimpleSelector::Universal);
            }
            _ => {}
        }

        loop {
            if !compound.is_empty() && !self.is_adjacent() {
                break;
            }
            match self.peek().map(|t| t.token.clone()) {
                Some(Token::Hash) => {
                    self.advance();
                    let name = self.expect_ident("id after '#'")?;
                    compound.push(SimpleSelector::Id(name));
                }
                Some(Token::Dot) => {
                    self.advance();
                    let name = self.expect_ident("class name after '.'")?;
                    compound.push(SimpleSelector::Class(name));
                }
                Some(Token::BracketOpen) => {
                    self.advance();
                    compound.push(self.parse_attribute()?);
                }
                _ => break,
            }
        }

        if compound.is_empty() {
            return match self.advance() {
                Some(tok) => Err(self.unexpected(tok, "selector")),
                None => Err(SelectorError::UnexpectedEof("expected selector".into())),
            };
        }
        Ok(compound)
    }

    /// Parse the rest of `[name]` or `[name=value]` after the opening bracket.
    fn parse_attribute(&mut self) -> Result<SimpleSelector, SelectorError> {
        let name = self.expect_ident("attribute name")?;
        let value = match self.peek().map(|t| t.token.clone()) {
            Some(Token::Equals) => {
                self.advance();
                match self.advance() {
                    Some(tok) if tok.token == Token::Ident => Some(tok.text),
                    Some(tok)
                        if matches!(
                            tok.token,
                            Token::StringLiteral | Token::StringLiteralSingle
                        ) =>
                    {
                        Some(tok.text[1..tok.text.len() - 1].to_string())
                    }
                    Some(tok) => return Err(self.unexpected(tok, "attribute value")),
                    None => {
                        return Err(SelectorError::UnexpectedEof(
                            "expected attribute value".into(),
                        ))
                    }
                }
            }
            _ => None,
        };
        match self.advance() {
            Some(tok) if tok.token == Token::BracketClose => {
                Ok(SimpleSelector::Attribute { name, value })
            }
            Some(tok) => Err(self.unexpected(tok, "']'")),
            None => Err(SelectorError::UnexpectedEof("expected ']'".into())),
        }
    }
}
