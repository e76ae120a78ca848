//! Grouping of a token sequence into tags.
//!
//! The lexer only emits balanced sequences, so `tags` never fails on its
//! output. Hand-built sequences are checked and rejected with a
//! `StreamError`.

use std::fmt;

use crate::classify::Delimiter;
use crate::token::{Span, Token, TokenKind};

/// One delimited region: its open token, the tokens inside, and the
/// close token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub delimiter: Delimiter,
    pub open: &'a Token,
    pub body: &'a [Token],
    pub close: &'a Token,
}

impl<'a> Tag<'a> {
    /// Body tokens without whitespace.
    pub fn significant(self) -> impl Iterator<Item = &'a Token> {
        self.body.iter().filter(|t| t.kind != TokenKind::Whitespace)
    }

    /// Trim modifiers on the open and close delimiters.
    #[must_use]
    pub fn trims(&self) -> (bool, bool) {
        (self.open.has_trim_modifier(), self.close.has_trim_modifier())
    }
}

/// Classifies a stream error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamErrorKind {
    /// Token found outside any tag.
    OutsideTag { found: String },
    /// Open token with no close before the end of the sequence.
    UnclosedTag { open: String },
    /// Close token that does not belong to the open tag.
    WrongClose { expected: TokenKind, found: String },
}

impl fmt::Display for StreamErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideTag { found } => {
                write!(f, "token '{found}' outside of a tag")
            }
            Self::UnclosedTag { open } => {
                write!(f, "tag opened with '{open}' is not closed")
            }
            Self::WrongClose { expected, found } => {
                write!(f, "expected {expected}, got '{found}'")
            }
        }
    }
}

/// Error produced when grouping tokens into tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct StreamError {
    pub kind: StreamErrorKind,
    pub span: Span,
}

/// Group a token sequence into tags.
///
/// # Errors
///
/// Returns `StreamError` if the sequence is not balanced.
pub fn tags(tokens: &[Token]) -> Result<Vec<Tag<'_>>, StreamError> {
    TagReader::new(tokens).read_all()
}

struct TagReader<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TagReader<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn read_all(mut self) -> Result<Vec<Tag<'a>>, StreamError> {
        let mut tags = Vec::new();
        while self.pos < self.tokens.len() {
            tags.push(self.read_tag()?);
        }
        Ok(tags)
    }

    fn read_tag(&mut self) -> Result<Tag<'a>, StreamError> {
        let open = &self.tokens[self.pos];
        let delimiter = match Delimiter::of(open.kind) {
            Some(d) if open.is_open() => d,
            _ => {
                return Err(StreamError {
                    kind: StreamErrorKind::OutsideTag {
                        found: open.value.clone(),
                    },
                    span: open.span,
                });
            }
        };
        self.pos += 1;

        let body_start = self.pos;
        while let Some(token) = self.tokens.get(self.pos) {
            if token.is_open() || token.is_close() {
                break;
            }
            self.pos += 1;
        }
        let body = &self.tokens[body_start..self.pos];

        let Some(close) = self.tokens.get(self.pos) else {
            return Err(StreamError {
                kind: StreamErrorKind::UnclosedTag {
                    open: open.value.clone(),
                },
                span: open.span,
            });
        };
        if close.kind != delimiter.close_kind() {
            return Err(StreamError {
                kind: StreamErrorKind::WrongClose {
                    expected: delimiter.close_kind(),
                    found: close.value.clone(),
                },
                span: close.span,
            });
        }
        self.pos += 1;

        Ok(Tag {
            delimiter,
            open,
            body,
            close,
        })
    }
}
