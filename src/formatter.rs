//! Text renderings of a token stream.
//!
//! `format_tokens` produces a diagnostic listing, `reassemble` rebuilds the
//! scanned source exactly, and `outer_text` keeps only the text between
//! tags.

use std::fmt::Write;

use crate::lexer::Scan;
use crate::token::Token;

/// Render one line per token: `line:column KIND "value"`.
///
/// Values are printed with Rust string escapes so whitespace stays visible.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{}:{} {} {:?}",
            token.span.line,
            token.span.column,
            token.kind.name(),
            token.value
        );
    }
    out
}

/// Rebuild the scanned source from token values and the source text
/// between them.
///
/// Returns `None` if the tokens overlap or run past the source, which
/// never happens for a lexer-produced `Scan`.
#[must_use]
pub fn reassemble(scan: &Scan<'_>) -> Option<String> {
    let mut out = String::with_capacity(scan.source.len());
    let mut pos = 0;
    for token in &scan.tokens {
        let gap = scan.source.get(pos..token.span.start)?;
        out.push_str(gap);
        out.push_str(&token.value);
        pos = token.span.end;
    }
    out.push_str(scan.source.get(pos..)?);
    Some(out)
}

/// Concatenate the template text outside every tag.
#[must_use]
pub fn outer_text(scan: &Scan<'_>) -> String {
    scan.text_segments().iter().map(|s| s.text).collect()
}
