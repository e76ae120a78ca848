//! Twig template lexer.
//!
//! Splits a template into typed, positioned tokens for the `{% %}`,
//! `{{ }}` and `{# #}` tags it contains, and reports delimiter errors
//! (unmatched, mismatched, nested, or unterminated tags) with the exact
//! line and column where they occur.
//!
//! # Quick start
//!
//! ```
//! use twig_lexer::{TokenKind, tokenize};
//!
//! let tokens = tokenize("<div>{{ value }}</div>").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::VariableStart,
//!         TokenKind::Whitespace,
//!         TokenKind::Symbol,
//!         TokenKind::Whitespace,
//!         TokenKind::VariableEnd,
//!     ]
//! );
//! ```
//!
//! ## Custom delimiters
//!
//! ```
//! use twig_lexer::{LexerOptions, formatter, scan};
//!
//! let opts = LexerOptions::new().block("<%", "%>");
//! let result = scan("a <% if x %> b", &opts).unwrap();
//! assert_eq!(result.tokens[0].value, "<%");
//! assert_eq!(formatter::outer_text(&result), "a  b");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classify;
pub mod cursor;
pub mod formatter;
pub mod lexer;
pub mod options;
pub mod stream;
pub mod token;

pub use classify::Delimiter;
pub use lexer::{LexError, LexErrorKind, Lexer, Scan, TextSegment, tokenize};
pub use options::{LexerOptions, OptionsError, OptionsErrorKind, OuterText};
pub use stream::{StreamError, StreamErrorKind, Tag, tags};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering option validation and lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid lexer options.
    #[error("{0}")]
    Options(#[from] OptionsError),
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// Validate `options` and scan `source` in one step.
pub fn scan<'a>(source: &'a str, options: &LexerOptions) -> Result<Scan<'a>, Error> {
    let lexer = Lexer::new(source, options)?;
    Ok(lexer.scan()?)
}
