use std::fmt;

use tracing::{debug, trace};

use crate::classify::{self, Delimiter, Delimiters};
use crate::cursor::{Cursor, Mark};
use crate::options::{LexerOptions, OptionsError, OuterText};
use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Text inside a tag, or outside one in strict mode, that fits no
    /// token kind.
    UnknownToken { token: Token },
    /// Opening delimiter found while another tag is open.
    UnexpectedOpen { found: Token, open: Token },
    /// Closing delimiter found while no tag is open.
    UnmatchedClose { found: Token },
    /// Closing delimiter of a different family than the open tag.
    MismatchedClose { found: Token, open: Token },
    /// Quoted string with no closing quote.
    UnterminatedString { token: Token },
    /// End of input reached while a tag is open. `expected_at` is where
    /// the closing delimiter was looked for.
    UnterminatedToken { open: Token, expected_at: Span },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken { token } => {
                write!(f, "unknown token '{}'", token.value)
            }
            Self::UnexpectedOpen { found, open } => {
                write!(
                    f,
                    "unexpected {} '{}' inside {} opened at line {}, column {}",
                    found.kind, found.value, open.kind, open.span.line, open.span.column
                )
            }
            Self::UnmatchedClose { found } => {
                write!(f, "unmatched {} '{}'", found.kind, found.value)
            }
            Self::MismatchedClose { found, open } => {
                write!(
                    f,
                    "'{}' cannot close {} '{}' opened at line {}, column {}",
                    found.value, open.kind, open.value, open.span.line, open.span.column
                )
            }
            Self::UnterminatedString { token } => {
                write!(f, "unterminated string {}", token.value)
            }
            Self::UnterminatedToken { open, .. } => {
                write!(
                    f,
                    "unexpected end of input, {} '{}' opened at line {}, \
                     column {} is never closed",
                    open.kind, open.value, open.span.line, open.span.column
                )
            }
        }
    }
}

/// Error produced during lexing.
///
/// `span` is where the violation was detected; for an unterminated tag it
/// is the point where the closing delimiter was expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Successful scan: the source and every token in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a> {
    pub source: &'a str,
    pub tokens: Vec<Token>,
}

/// A run of template text outside any tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSegment<'a> {
    pub start: usize,
    pub text: &'a str,
}

impl<'a> Scan<'a> {
    /// Outer template text between tags, in source order.
    ///
    /// Comment bodies are not outer text and are never returned.
    #[must_use]
    pub fn text_segments(&self) -> Vec<TextSegment<'a>> {
        let mut segments = Vec::new();
        let mut pos = 0;
        for token in &self.tokens {
            if token.is_open() && token.span.start > pos {
                segments.push(TextSegment {
                    start: pos,
                    text: &self.source[pos..token.span.start],
                });
            }
            if token.is_close() {
                pos = token.span.end;
            }
        }
        if pos < self.source.len() {
            segments.push(TextSegment {
                start: pos,
                text: &self.source[pos..],
            });
        }
        segments
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Tokenize a template with the default delimiters.
///
/// # Errors
///
/// Returns `LexError` on the first delimiter, string, or token violation.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let opts = LexerOptions::default();
    Lexer::from_parts(source, Delimiters::new(&opts), opts.outer_text).tokenize()
}

/// The tag currently open, kept so errors can point back at it.
#[derive(Debug, Clone)]
struct OpenTag {
    delimiter: Delimiter,
    token: Token,
}

/// Template lexer. Single use: consumed by `tokenize` or `scan`.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    delimiters: Delimiters,
    outer_text: OuterText,
    open: Option<OpenTag>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for `source` using `options`.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` when the delimiter literals are invalid.
    pub fn new(source: &'a str, options: &LexerOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::from_parts(
            source,
            Delimiters::new(options),
            options.outer_text,
        ))
    }

    fn from_parts(source: &'a str, delimiters: Delimiters, outer_text: OuterText) -> Self {
        Self {
            cursor: Cursor::new(source),
            delimiters,
            outer_text,
            open: None,
            tokens: Vec::new(),
        }
    }

    /// Run the lexer to completion and return the tokens.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered in source order.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.scan().map(Scan::into_tokens)
    }

    /// Run the lexer to completion and return the source with its tokens.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered in source order.
    pub fn scan(mut self) -> Result<Scan<'a>, LexError> {
        let source = self.cursor.source();
        debug!(bytes = source.len(), "scanning template");

        if let Err(err) = self.run() {
            debug!(
                line = err.span.line,
                column = err.span.column,
                error = %err.kind,
                "scan failed"
            );
            return Err(err);
        }

        debug!(tokens = self.tokens.len(), "scan finished");
        Ok(Scan {
            source,
            tokens: self.tokens,
        })
    }

    fn run(&mut self) -> Result<(), LexError> {
        while !self.cursor.is_at_end() {
            self.step()?;
        }
        match &self.open {
            Some(open) => Err(self.unterminated(open)),
            None => Ok(()),
        }
    }

    /// Consume one lexical unit: a token, an opaque comment character, or
    /// an outer text character.
    fn step(&mut self) -> Result<(), LexError> {
        let rest = self.cursor.rest();

        if let Some(open) = &self.open
            && self
                .cursor
                .fewer_than(self.delimiters.min_close_len(open.delimiter))
        {
            return Err(self.unterminated(open));
        }

        if let Some((literal, found)) = self.delimiters.close_at(&self.cursor) {
            let literal = &rest[..literal.len()];
            return self.close(literal, found);
        }

        let Some(open) = &self.open else {
            if let Some((literal, delimiter)) = self.delimiters.open_at(&self.cursor) {
                let literal = &rest[..literal.len()];
                self.open_tag(literal, delimiter);
                return Ok(());
            }
            return self.outer_char();
        };

        if open.delimiter == Delimiter::Comment {
            self.cursor.forward();
            return Ok(());
        }

        if let Some((literal, nested)) = self.delimiters.open_at(&self.cursor) {
            let literal = &rest[..literal.len()];
            let open = open.token.clone();
            let found = self.collect_token(nested.open_kind(), literal);
            return Err(LexError {
                span: found.span,
                kind: LexErrorKind::UnexpectedOpen { found, open },
            });
        }

        self.content()
    }

    fn open_tag(&mut self, literal: &'a str, delimiter: Delimiter) {
        let token = self.collect_token(delimiter.open_kind(), literal);
        self.open = Some(OpenTag {
            delimiter,
            token: token.clone(),
        });
        self.push(token);
    }

    fn close(&mut self, literal: &'a str, found: Delimiter) -> Result<(), LexError> {
        let Some(open) = &self.open else {
            let found = self.collect_token(found.close_kind(), literal);
            return Err(LexError {
                span: found.span,
                kind: LexErrorKind::UnmatchedClose { found },
            });
        };

        let rest = self.cursor.rest();
        if let Some(own) = self.delimiters.close_of_at(open.delimiter, &self.cursor) {
            let own = &rest[..own.len()];
            let kind = open.delimiter.close_kind();
            let token = self.collect_token(kind, own);
            self.open = None;
            self.push(token);
            return Ok(());
        }

        // foreign close literals are plain text inside a comment
        if open.delimiter == Delimiter::Comment {
            self.cursor.forward();
            return Ok(());
        }

        let open = open.token.clone();
        let found = self.collect_token(found.close_kind(), literal);
        Err(LexError {
            span: found.span,
            kind: LexErrorKind::MismatchedClose { found, open },
        })
    }

    fn outer_char(&mut self) -> Result<(), LexError> {
        let mark = self.cursor.mark();
        self.cursor.forward();
        match self.outer_text {
            OuterText::Skip => Ok(()),
            OuterText::Reject => Err(self.unknown(mark)),
        }
    }

    /// Classify text inside an open block or variable tag.
    fn content(&mut self) -> Result<(), LexError> {
        let Some(ch) = self.cursor.current() else {
            return Ok(());
        };
        let mark = self.cursor.mark();
        let delimiters = &self.delimiters;

        if classify::is_whitespace(ch) {
            self.cursor.collect_while(|c, ch| {
                classify::is_whitespace(ch) && delimiters.close_at(c).is_none()
            });
            let token = self.make_token(TokenKind::Whitespace, mark);
            self.push(token);
            return Ok(());
        }

        if classify::is_quote(ch) {
            return self.string(ch, mark);
        }

        if classify::is_delimiter_char(ch) {
            let kind = if let Some(op) = classify::operator_at(&self.cursor) {
                self.cursor.collect(op);
                TokenKind::Operator
            } else if let Some(kind) = classify::punctuation(ch) {
                self.cursor.forward();
                kind
            } else {
                self.cursor.forward();
                return Err(self.unknown(mark));
            };
            let token = self.make_token(kind, mark);
            self.push(token);
            return Ok(());
        }

        let word = self.cursor.collect_while(|c, ch| {
            !classify::is_whitespace(ch)
                && !classify::is_delimiter_char(ch)
                && !classify::is_quote(ch)
                && delimiters.close_at(c).is_none()
        });
        if word.is_empty() {
            self.cursor.forward();
            return Err(self.unknown(mark));
        }
        let token = self.make_token(classify::word_kind(word), mark);
        self.push(token);
        Ok(())
    }

    /// Scan a quoted string; a backslash escapes the next character.
    fn string(&mut self, quote: char, mark: Mark) -> Result<(), LexError> {
        self.cursor.forward();
        loop {
            match self.cursor.forward() {
                None => {
                    let token = self.make_token(TokenKind::String, mark);
                    return Err(LexError {
                        span: token.span,
                        kind: LexErrorKind::UnterminatedString { token },
                    });
                }
                Some('\\') => {
                    self.cursor.forward();
                }
                Some(ch) if ch == quote => break,
                Some(_) => {}
            }
        }
        let token = self.make_token(TokenKind::String, mark);
        self.push(token);
        Ok(())
    }

    fn collect_token(&mut self, kind: TokenKind, literal: &'a str) -> Token {
        let mark = self.cursor.mark();
        self.cursor.collect(literal);
        self.make_token(kind, mark)
    }

    fn make_token(&self, kind: TokenKind, mark: Mark) -> Token {
        let span = self.cursor.span_from(mark);
        Token::new(kind, &self.cursor.source()[span.start..span.end], span)
    }

    fn push(&mut self, token: Token) {
        trace!(
            kind = %token.kind,
            line = token.span.line,
            column = token.span.column,
            "token"
        );
        self.tokens.push(token);
    }

    fn unknown(&self, mark: Mark) -> LexError {
        let token = self.make_token(TokenKind::Unknown, mark);
        LexError {
            span: token.span,
            kind: LexErrorKind::UnknownToken { token },
        }
    }

    fn unterminated(&self, open: &OpenTag) -> LexError {
        let expected_at = self.cursor.span_from(self.cursor.mark());
        LexError {
            kind: LexErrorKind::UnterminatedToken {
                open: open.token.clone(),
                expected_at,
            },
            span: expected_at,
        }
    }
}
