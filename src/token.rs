use std::fmt;

/// Source location of a token.
///
/// `start`/`end` are byte offsets into the scanned source; `line` and
/// `column` are 1-based and point at the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Quoted string literal, quotes included.
    String,
    /// Run of whitespace inside a tag.
    Whitespace,
    /// `{%` or `{%-`.
    BlockStart,
    /// `%}` or `-%}`.
    BlockEnd,
    /// `{{`.
    VariableStart,
    /// `}}`.
    VariableEnd,
    /// `{#`.
    CommentStart,
    /// `#}`.
    CommentEnd,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftCurly,
    RightCurly,
    /// Comparison or arithmetic operator (`==`, `+`, `%`, ...).
    Operator,
    Comma,
    Dot,
    /// Single `=`.
    Assignment,
    Colon,
    Tilde,
    Pipe,
    /// Run of ASCII digits.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Any other word.
    Symbol,
    Unknown,
}

impl TokenKind {
    /// Fixed diagnostic name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Whitespace => "WHITESPACE",
            Self::BlockStart => "BLOCK_START",
            Self::BlockEnd => "BLOCK_END",
            Self::VariableStart => "VARIABLE_START",
            Self::VariableEnd => "VARIABLE_END",
            Self::CommentStart => "COMMENT_START",
            Self::CommentEnd => "COMMENT_END",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::LeftCurly => "LEFT_CURLY",
            Self::RightCurly => "RIGHT_CURLY",
            Self::Operator => "OPERATOR",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Assignment => "ASSIGNMENT",
            Self::Colon => "COLON",
            Self::Tilde => "TILDE",
            Self::Pipe => "PIPE",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
            Self::Symbol => "SYMBOL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// True for `BLOCK_START`, `VARIABLE_START` and `COMMENT_START`.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            Self::BlockStart | Self::VariableStart | Self::CommentStart
        )
    }

    /// True for `BLOCK_END`, `VARIABLE_END` and `COMMENT_END`.
    #[must_use]
    pub const fn is_close(self) -> bool {
        matches!(self, Self::BlockEnd | Self::VariableEnd | Self::CommentEnd)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token with its kind, exact source text, and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    /// Diagnostic name of this token's kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.kind.is_open()
    }

    #[must_use]
    pub const fn is_close(&self) -> bool {
        self.kind.is_close()
    }

    /// Whether a block delimiter carries the `-` trim modifier
    /// (`{%-` or `-%}`).
    #[must_use]
    pub fn has_trim_modifier(&self) -> bool {
        match self.kind {
            TokenKind::BlockStart => self.value.ends_with('-'),
            TokenKind::BlockEnd => self.value.starts_with('-'),
            _ => false,
        }
    }
}
