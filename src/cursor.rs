//! Character cursor over template source.
//!
//! `line`/`column` always describe the most recently consumed character:
//! column 0 means nothing has been consumed on the current line yet.

use crate::token::Span;

/// Saved cursor position, taken before consuming a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    index: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            line: 1,
            column: 0,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the next unconsumed character.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// Character at the cursor, not yet consumed.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Most recently consumed character.
    #[must_use]
    pub fn previous(&self) -> Option<char> {
        self.source[..self.index].chars().next_back()
    }

    /// Position of the next character, for the start of a span.
    #[must_use]
    pub const fn mark(&self) -> Mark {
        Mark {
            index: self.index,
            line: self.line,
            column: self.column + 1,
        }
    }

    /// Span from `mark` up to the cursor.
    #[must_use]
    pub const fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.index, self.index, mark.line, mark.column)
    }

    /// Consume one character. Returns `None` at end of input without
    /// moving.
    pub fn forward(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.index += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Un-consume one character. Returns `None` at the start of input
    /// without moving.
    pub fn backward(&mut self) -> Option<char> {
        let ch = self.previous()?;
        self.index -= ch.len_utf8();
        if ch == '\n' {
            self.line -= 1;
            let before = &self.source[..self.index];
            self.column = match before.rfind('\n') {
                Some(nl) => before[nl + 1..].chars().count(),
                None => before.chars().count(),
            };
        } else {
            self.column -= 1;
        }
        Some(ch)
    }

    /// Whether fewer than `n` characters remain.
    #[must_use]
    pub fn fewer_than(&self, n: usize) -> bool {
        self.rest().chars().take(n).count() < n
    }

    /// Whether `literal` starts at the cursor.
    #[must_use]
    pub fn peek_next(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Consume `literal` if it starts at the cursor.
    ///
    /// On a partial match the cursor is rewound to where it started.
    pub fn collect(&mut self, literal: &str) -> Option<&'a str> {
        let start = self.index;
        for expected in literal.chars() {
            if self.current() != Some(expected) {
                self.rewind_to(start);
                return None;
            }
            self.forward();
        }
        Some(&self.source[start..self.index])
    }

    /// Consume characters while `pred` holds, returning the consumed text.
    pub fn collect_while(&mut self, mut pred: impl FnMut(&Self, char) -> bool) -> &'a str {
        let start = self.index;
        while let Some(ch) = self.current() {
            if !pred(self, ch) {
                break;
            }
            self.forward();
        }
        &self.source[start..self.index]
    }

    fn rewind_to(&mut self, index: usize) {
        while self.index > index {
            self.backward();
        }
    }
}
