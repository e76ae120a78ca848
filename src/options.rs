use std::fmt;

use crate::classify::TRIM_MODIFIER;

/// What the lexer does with text outside any delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OuterText {
    /// Emit nothing; the text stays recoverable from the source.
    #[default]
    Skip,
    /// Fail with an unknown-token error on the first outer character.
    Reject,
}

/// Delimiter literals and flags used by the lexer.
///
/// `trim_blocks` and `lstrip_blocks` are carried for the rendering stage;
/// the lexer only recognizes the `-` trim modifier on block delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    pub block_start: String,
    pub block_end: String,
    pub variable_start: String,
    pub variable_end: String,
    pub comment_start: String,
    pub comment_end: String,
    pub trim_blocks: bool,
    pub lstrip_blocks: bool,
    pub outer_text: OuterText,
}

impl LexerOptions {
    /// Default Twig delimiters: `{% %}`, `{{ }}`, `{# #}`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            block_start: "{%".to_string(),
            block_end: "%}".to_string(),
            variable_start: "{{".to_string(),
            variable_end: "}}".to_string(),
            comment_start: "{#".to_string(),
            comment_end: "#}".to_string(),
            trim_blocks: false,
            lstrip_blocks: false,
            outer_text: OuterText::Skip,
        }
    }

    /// Set the block delimiter pair.
    #[must_use]
    pub fn block(mut self, start: &str, end: &str) -> Self {
        self.block_start = start.to_string();
        self.block_end = end.to_string();
        self
    }

    /// Set the variable delimiter pair.
    #[must_use]
    pub fn variable(mut self, start: &str, end: &str) -> Self {
        self.variable_start = start.to_string();
        self.variable_end = end.to_string();
        self
    }

    /// Set the comment delimiter pair.
    #[must_use]
    pub fn comment(mut self, start: &str, end: &str) -> Self {
        self.comment_start = start.to_string();
        self.comment_end = end.to_string();
        self
    }

    #[must_use]
    pub const fn trim_blocks(mut self, enabled: bool) -> Self {
        self.trim_blocks = enabled;
        self
    }

    #[must_use]
    pub const fn lstrip_blocks(mut self, enabled: bool) -> Self {
        self.lstrip_blocks = enabled;
        self
    }

    #[must_use]
    pub const fn outer_text(mut self, policy: OuterText) -> Self {
        self.outer_text = policy;
        self
    }

    /// Every literal the lexer matches, paired with the option it comes
    /// from. The trim forms of the block pair follow the pair itself.
    fn literals(&self) -> [(&'static str, String); 8] {
        [
            ("block_start", self.block_start.clone()),
            ("block_end", self.block_end.clone()),
            (
                "block_start (trimmed)",
                format!("{}{TRIM_MODIFIER}", self.block_start),
            ),
            (
                "block_end (trimmed)",
                format!("{TRIM_MODIFIER}{}", self.block_end),
            ),
            ("variable_start", self.variable_start.clone()),
            ("variable_end", self.variable_end.clone()),
            ("comment_start", self.comment_start.clone()),
            ("comment_end", self.comment_end.clone()),
        ]
    }

    /// Check that every literal, trim forms included, is non-empty and
    /// distinct from the others.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` naming the first offending option.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let literals = self.literals();
        for (i, (name, literal)) in literals.iter().enumerate() {
            if literal.is_empty() {
                return Err(OptionsError {
                    kind: OptionsErrorKind::EmptyDelimiter,
                    option: *name,
                });
            }
            if let Some((other, _)) = literals[..i].iter().find(|(_, l)| l == literal) {
                return Err(OptionsError {
                    kind: OptionsErrorKind::DuplicateDelimiter {
                        literal: literal.clone(),
                        other: *other,
                    },
                    option: *name,
                });
            }
        }
        Ok(())
    }
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies an options error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsErrorKind {
    /// A delimiter literal is the empty string.
    EmptyDelimiter,
    /// A delimiter literal is reused by another option.
    DuplicateDelimiter {
        literal: String,
        other: &'static str,
    },
}

impl fmt::Display for OptionsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDelimiter => write!(f, "empty delimiter"),
            Self::DuplicateDelimiter { literal, other } => {
                write!(f, "delimiter '{literal}' already used by {other}")
            }
        }
    }
}

/// Error produced when validating `LexerOptions`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid option {option}: {kind}")]
pub struct OptionsError {
    pub kind: OptionsErrorKind,
    pub option: &'static str,
}
