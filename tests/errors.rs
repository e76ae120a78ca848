//! Error kinds, positions, and messages.

mod common;

use common::lex_err;
use twig_lexer::{
    Error, LexErrorKind, Lexer, LexerOptions, OptionsErrorKind, OuterText, TokenKind, scan,
};

// -----------------------------------------------------------
// Unmatched and mismatched closes.
// -----------------------------------------------------------

#[test]
fn unmatched_close() {
    let err = lex_err("text #} text");
    let LexErrorKind::UnmatchedClose { found } = &err.kind else {
        panic!("expected UnmatchedClose, got {:?}", err.kind);
    };
    assert_eq!(found.kind, TokenKind::CommentEnd);
    assert_eq!(found.value, "#}");
    assert_eq!((err.span.line, err.span.column), (1, 6));
    assert_eq!(err.to_string(), "unmatched COMMENT_END '#}' at line 1, column 6");
}

#[test]
fn unmatched_close_in_sentence() {
    let err = lex_err("This is an test #} and it should throw error");
    assert!(matches!(err.kind, LexErrorKind::UnmatchedClose { .. }));
    assert_eq!(err.span.column, 17);
}

#[test]
fn unmatched_trim_close() {
    let err = lex_err("a -%} b");
    let LexErrorKind::UnmatchedClose { found } = &err.kind else {
        panic!("expected UnmatchedClose, got {:?}", err.kind);
    };
    assert_eq!(found.kind, TokenKind::BlockEnd);
    assert_eq!(found.value, "-%}");
    assert_eq!(err.span.column, 3);
}

#[test]
fn mismatched_close_reports_open_tag() {
    let err = lex_err("This is an test \n    {% and it should throw #} error");
    let LexErrorKind::MismatchedClose { found, open } = &err.kind else {
        panic!("expected MismatchedClose, got {:?}", err.kind);
    };
    assert_eq!(found.value, "#}");
    assert_eq!(found.kind, TokenKind::CommentEnd);
    assert_eq!(open.kind, TokenKind::BlockStart);
    assert_eq!((open.span.line, open.span.column), (2, 5));
    assert_eq!((err.span.line, err.span.column), (2, 28));
}

#[test]
fn mismatched_block_close_in_variable() {
    let err = lex_err("{{ x %}");
    assert!(matches!(
        &err.kind,
        LexErrorKind::MismatchedClose { found, open }
        if found.kind == TokenKind::BlockEnd && open.kind == TokenKind::VariableStart
    ));
}

#[test]
fn mismatched_trim_close_in_variable() {
    let err = lex_err("{{ x -%}");
    assert!(matches!(
        &err.kind,
        LexErrorKind::MismatchedClose { found, .. } if found.value == "-%}"
    ));
    assert_eq!(
        err.to_string(),
        "'-%}' cannot close VARIABLE_START '{{' opened at line 1, column 1 \
         at line 1, column 6"
    );
}

// -----------------------------------------------------------
// Nested opens.
// -----------------------------------------------------------

#[test]
fn nested_block_open() {
    let err = lex_err("{% {% x %}");
    let LexErrorKind::UnexpectedOpen { found, open } = &err.kind else {
        panic!("expected UnexpectedOpen, got {:?}", err.kind);
    };
    assert_eq!(found.kind, TokenKind::BlockStart);
    assert_eq!(found.value, "{%");
    assert_eq!(open.span.column, 1);
    assert_eq!((err.span.line, err.span.column), (1, 4));
}

#[test]
fn nested_variable_open_on_second_line() {
    let err = lex_err("This is an test \n    {{ {{ token }} and it should throw  error");
    assert!(matches!(
        &err.kind,
        LexErrorKind::UnexpectedOpen { found, .. }
        if found.kind == TokenKind::VariableStart
    ));
    assert_eq!((err.span.line, err.span.column), (2, 8));
}

#[test]
fn comment_open_inside_block() {
    let err = lex_err("{% x {# y #}");
    assert!(matches!(
        &err.kind,
        LexErrorKind::UnexpectedOpen { found, open }
        if found.kind == TokenKind::CommentStart && open.kind == TokenKind::BlockStart
    ));
}

// -----------------------------------------------------------
// Unterminated tags and strings.
// -----------------------------------------------------------

#[test]
fn unterminated_comment() {
    let err = lex_err("{# unterminated");
    let LexErrorKind::UnterminatedToken { open, expected_at } = &err.kind else {
        panic!("expected UnterminatedToken, got {:?}", err.kind);
    };
    assert_eq!(open.kind, TokenKind::CommentStart);
    assert_eq!((open.span.line, open.span.column), (1, 1));
    assert_eq!((expected_at.line, expected_at.column), (1, 15));
    assert_eq!(expected_at.start, 14);
    assert_eq!(*expected_at, err.span);
    assert_eq!(
        err.to_string(),
        "unexpected end of input, COMMENT_START '{#' opened at line 1, column 1 \
         is never closed at line 1, column 15"
    );
}

#[test]
fn unterminated_comment_on_second_line() {
    let err = lex_err("This is an test \n    {# and it should throw error");
    let LexErrorKind::UnterminatedToken { open, expected_at } = &err.kind else {
        panic!("expected UnterminatedToken, got {:?}", err.kind);
    };
    assert_eq!(open.value, "{#");
    assert_eq!((open.span.line, open.span.column), (2, 5));
    assert_eq!((expected_at.line, expected_at.column), (2, 32));
    assert_eq!((err.span.line, err.span.column), (2, 32));
}

#[test]
fn unterminated_after_string_at_end() {
    let err = lex_err(r#"{{ "a""#);
    assert!(matches!(err.kind, LexErrorKind::UnterminatedToken { .. }));
    assert_eq!(err.span.column, 7);
}

#[test]
fn open_delimiter_alone() {
    let err = lex_err("{%");
    assert!(matches!(
        &err.kind,
        LexErrorKind::UnterminatedToken { open, .. } if open.value == "{%"
    ));
    assert_eq!(err.span.column, 3);
}

#[test]
fn half_close_is_unterminated() {
    let err = lex_err("{{ x }");
    assert!(matches!(err.kind, LexErrorKind::UnterminatedToken { .. }));
    assert_eq!(err.span.column, 6);
}

#[test]
fn unterminated_position_ignores_character_width() {
    let ascii = lex_err("{{ x");
    let wide = lex_err("{{ é");
    assert_eq!((ascii.span.line, ascii.span.column), (1, 4));
    assert_eq!((wide.span.line, wide.span.column), (1, 4));
    let LexErrorKind::UnterminatedToken { open, expected_at } = &wide.kind else {
        panic!("expected UnterminatedToken, got {:?}", wide.kind);
    };
    assert_eq!(open.value, "{{");
    assert_eq!(expected_at.start, 3);
}

#[test]
fn unterminated_string() {
    let err = lex_err(r#"{{ "abc }}"#);
    let LexErrorKind::UnterminatedString { token } = &err.kind else {
        panic!("expected UnterminatedString, got {:?}", err.kind);
    };
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, r#""abc }}"#);
    assert_eq!(err.span.column, 4);
}

// -----------------------------------------------------------
// Unknown tokens.
// -----------------------------------------------------------

#[test]
fn lone_bang_is_unknown() {
    let err = lex_err("{{ a ! b }}");
    assert!(matches!(
        &err.kind,
        LexErrorKind::UnknownToken { token }
        if token.value == "!" && token.kind == TokenKind::Unknown
    ));
    assert_eq!(err.span.column, 6);
}

#[test]
fn hash_inside_variable_is_unknown() {
    let err = lex_err("{{ # }}");
    assert!(matches!(
        &err.kind,
        LexErrorKind::UnknownToken { token } if token.value == "#"
    ));
}

#[test]
fn strict_mode_rejects_outer_text() {
    let opts = LexerOptions::new().outer_text(OuterText::Reject);
    let err = Lexer::new("{{ a }}\n", &opts)
        .expect("valid options")
        .tokenize()
        .unwrap_err();
    assert_eq!((err.span.line, err.span.column), (1, 8));
    assert!(Lexer::new("{{ a }}{# b #}", &opts)
        .expect("valid options")
        .tokenize()
        .is_ok());
}

// -----------------------------------------------------------
// Reporting.
// -----------------------------------------------------------

#[test]
fn first_violation_wins() {
    let err = lex_err("#} {{");
    assert!(matches!(err.kind, LexErrorKind::UnmatchedClose { .. }));
}

#[test]
fn invalid_options_are_reported_before_scanning() {
    let opts = LexerOptions::new().block("", "%}");
    let err = scan("#}", &opts).unwrap_err();
    assert!(matches!(
        &err,
        Error::Options(e) if e.kind == OptionsErrorKind::EmptyDelimiter
    ));
    assert_eq!(err.to_string(), "invalid option block_start: empty delimiter");
}

#[test]
fn start_literal_shadowed_by_trim_form_is_rejected() {
    let opts = LexerOptions::new().variable("{%-", "}}");
    let err = scan("{%- x }}", &opts).unwrap_err();
    let Error::Options(e) = &err else {
        panic!("expected an options error, got {err:?}");
    };
    assert_eq!(e.option, "variable_start");
    assert_eq!(
        err.to_string(),
        "invalid option variable_start: delimiter '{%-' already used by block_start (trimmed)"
    );
}

#[test]
fn lex_errors_convert_into_unified_error() {
    let err = scan("{{", &LexerOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Lex(_)));
}
