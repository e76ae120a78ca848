#![allow(dead_code)]

use twig_lexer::{LexError, Token, TokenKind, tokenize};

/// Layout-style template used across the integration tests.
pub const LAYOUT: &str = "\
<!DOCTYPE html>
<html>
<head>
    {# page title #}
    <title>{% block title %}{{ site.name|upper }}{% endblock %}</title>
</head>
<body>
    {%- for item in items if item.visible -%}
        <li class=\"{{ loop.index is odd ? 'odd' : 'even' }}\">{{ item.label ~ \"!\" }}</li>
    {%- endfor -%}
</body>
</html>
";

pub fn lex(input: &str) -> Vec<Token> {
    tokenize(input).unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
}

pub fn lex_err(input: &str) -> LexError {
    match tokenize(input) {
        Ok(tokens) => panic!("expected an error for {input:?}, got {tokens:?}"),
        Err(e) => e,
    }
}

/// Kind and value pairs, for compact whole-sequence assertions.
pub fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
}

/// Tokens with whitespace removed.
pub fn significant(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| (t.kind, t.value.as_str()))
        .collect()
}
