//! Delimiter, operator, and punctuation recognition.

use crate::cursor::Cursor;
use crate::options::LexerOptions;
use crate::token::TokenKind;

/// Operators, longest first so `===` wins over `==` and `=`.
pub const OPERATORS: &[&str] = &[
    "===", "!==", "==", "!=", ">=", "<=", "++", "--", ">", "<", "+", "-", "*", "/", "%",
];

/// Suffix on a block open, or prefix on a block close, marking whitespace
/// control.
pub(crate) const TRIM_MODIFIER: &str = "-";

/// The three delimiter families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Block,
    Variable,
    Comment,
}

impl Delimiter {
    #[must_use]
    pub const fn open_kind(self) -> TokenKind {
        match self {
            Self::Block => TokenKind::BlockStart,
            Self::Variable => TokenKind::VariableStart,
            Self::Comment => TokenKind::CommentStart,
        }
    }

    #[must_use]
    pub const fn close_kind(self) -> TokenKind {
        match self {
            Self::Block => TokenKind::BlockEnd,
            Self::Variable => TokenKind::VariableEnd,
            Self::Comment => TokenKind::CommentEnd,
        }
    }

    /// Family of an open or close delimiter kind.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::BlockStart | TokenKind::BlockEnd => Some(Self::Block),
            TokenKind::VariableStart | TokenKind::VariableEnd => Some(Self::Variable),
            TokenKind::CommentStart | TokenKind::CommentEnd => Some(Self::Comment),
            _ => None,
        }
    }
}

/// Delimiter literals in match precedence order.
///
/// The trim-modified block literals come before the plain ones.
#[derive(Debug, Clone)]
pub struct Delimiters {
    opens: [(String, Delimiter); 4],
    closes: [(String, Delimiter); 4],
}

impl Delimiters {
    #[must_use]
    pub fn new(opts: &LexerOptions) -> Self {
        Self {
            opens: [
                (
                    format!("{}{TRIM_MODIFIER}", opts.block_start),
                    Delimiter::Block,
                ),
                (opts.block_start.clone(), Delimiter::Block),
                (opts.variable_start.clone(), Delimiter::Variable),
                (opts.comment_start.clone(), Delimiter::Comment),
            ],
            closes: [
                (
                    format!("{TRIM_MODIFIER}{}", opts.block_end),
                    Delimiter::Block,
                ),
                (opts.block_end.clone(), Delimiter::Block),
                (opts.variable_end.clone(), Delimiter::Variable),
                (opts.comment_end.clone(), Delimiter::Comment),
            ],
        }
    }

    /// Opening literal at the cursor, if any.
    #[must_use]
    pub fn open_at(&self, cursor: &Cursor<'_>) -> Option<(&str, Delimiter)> {
        Self::first_match(&self.opens, cursor)
    }

    /// Closing literal at the cursor, if any.
    #[must_use]
    pub fn close_at(&self, cursor: &Cursor<'_>) -> Option<(&str, Delimiter)> {
        Self::first_match(&self.closes, cursor)
    }

    /// Closing literal of `delimiter` at the cursor, if any.
    /// Trim and plain block closes both count.
    #[must_use]
    pub fn close_of_at(&self, delimiter: Delimiter, cursor: &Cursor<'_>) -> Option<&str> {
        self.closes
            .iter()
            .find(|(lit, d)| *d == delimiter && cursor.peek_next(lit))
            .map(|(lit, _)| lit.as_str())
    }

    /// Length in characters of the shortest literal that closes
    /// `delimiter`.
    #[must_use]
    pub fn min_close_len(&self, delimiter: Delimiter) -> usize {
        self.closes
            .iter()
            .filter(|(_, d)| *d == delimiter)
            .map(|(lit, _)| lit.chars().count())
            .min()
            .unwrap_or(0)
    }

    fn first_match<'a>(
        table: &'a [(String, Delimiter)],
        cursor: &Cursor<'_>,
    ) -> Option<(&'a str, Delimiter)> {
        table
            .iter()
            .find(|(lit, _)| cursor.peek_next(lit))
            .map(|(lit, d)| (lit.as_str(), *d))
    }
}

/// Whitespace inside a tag, including the no-break space.
#[must_use]
pub fn is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

#[must_use]
pub const fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}

/// Characters that start an operator or punctuation token and end a word.
#[must_use]
pub const fn is_delimiter_char(ch: char) -> bool {
    matches!(
        ch,
        '(' | ')'
            | '.'
            | '['
            | ']'
            | '{'
            | '}'
            | '%'
            | '*'
            | '-'
            | '+'
            | '~'
            | '/'
            | '#'
            | ','
            | ':'
            | '|'
            | '<'
            | '>'
            | '='
            | '!'
    )
}

/// Longest operator at the cursor.
#[must_use]
pub fn operator_at(cursor: &Cursor<'_>) -> Option<&'static str> {
    OPERATORS.iter().copied().find(|op| cursor.peek_next(op))
}

/// Kind of a single punctuation character.
#[must_use]
pub const fn punctuation(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftCurly,
        '}' => TokenKind::RightCurly,
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        '~' => TokenKind::Tilde,
        '|' => TokenKind::Pipe,
        '.' => TokenKind::Dot,
        '=' => TokenKind::Assignment,
        _ => return None,
    };
    Some(kind)
}

/// Kind of a collected word: digits, a boolean literal, or a symbol.
#[must_use]
pub fn word_kind(word: &str) -> TokenKind {
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
        TokenKind::Number
    } else if matches!(word, "true" | "false") {
        TokenKind::Boolean
    } else {
        TokenKind::Symbol
    }
}
