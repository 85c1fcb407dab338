use super::*;
use pretty_assertions::assert_eq;

/// Helper: tokenize and pair each kind with its text.
fn lex(source: &str) -> Vec<(TokenKind, &str)> {
    match tokenize(source) {
        Ok(tokens) => tokens.iter().map(|t| (t.kind, t.text(source))).collect(),
        Err(e) => panic!("tokenize failed for {source:?}: {e}"),
    }
}

/// Helper: same, without whitespace and comments.
fn lex_significant(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source)
        .into_iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .collect()
}

const DELIM: TokenKind = TokenKind::External(TokenType::StringDelim);
const TRIPLE_DELIM: TokenKind = TokenKind::External(TokenType::TripleStringDelim);
const CONTENT: TokenKind = TokenKind::External(TokenType::StringContent);
const RAW_CONTENT: TokenKind = TokenKind::External(TokenType::StringContentNoInterpolation);
const TRIPLE_CONTENT: TokenKind = TokenKind::External(TokenType::TripleStringContent);
const BLOCK: TokenKind = TokenKind::External(TokenType::BlockComment);
const PAREN: TokenKind = TokenKind::External(TokenType::ImmediateParen);

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn plain_string() {
    assert_eq!(
        lex("x = \"abc\""),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Punct, "="),
            (TokenKind::Whitespace, " "),
            (DELIM, "\""),
            (CONTENT, "abc"),
            (DELIM, "\""),
        ]
    );
}

#[test]
fn empty_string() {
    assert_eq!(lex("\"\""), vec![(DELIM, "\""), (DELIM, "\"")]);
}

#[test]
fn interpolated_string() {
    assert_eq!(
        lex("\"a $b and $(f(x)) c\""),
        vec![
            (DELIM, "\""),
            (CONTENT, "a "),
            (TokenKind::Interpolation, "$b"),
            (CONTENT, " and "),
            (TokenKind::Interpolation, "$(f(x))"),
            (CONTENT, " c"),
            (DELIM, "\""),
        ]
    );
}

#[test]
fn string_macro_prefix_disables_interpolation() {
    assert_eq!(
        lex_significant("r\"a$b\""),
        vec![
            (TokenKind::Identifier, "r"),
            (DELIM, "\""),
            (RAW_CONTENT, "a$b"),
            (DELIM, "\""),
        ]
    );
}

#[test]
fn triple_string_with_embedded_quotes() {
    assert_eq!(
        lex("\"\"\"a\"b\"\"\""),
        vec![
            (TRIPLE_DELIM, "\"\"\""),
            (TRIPLE_CONTENT, "a\"b"),
            (TRIPLE_DELIM, "\"\"\""),
        ]
    );
}

#[test]
fn triple_string_content_starting_with_quote() {
    assert_eq!(
        lex("\"\"\"\"x\"\"\""),
        vec![
            (TRIPLE_DELIM, "\"\"\""),
            (TRIPLE_CONTENT, "\"x"),
            (TRIPLE_DELIM, "\"\"\""),
        ]
    );
}

#[test]
fn escaped_quote_stays_in_content() {
    assert_eq!(
        lex("\"a\\\"b\""),
        vec![(DELIM, "\""), (CONTENT, "a\\\"b"), (DELIM, "\"")]
    );
}

#[test]
fn unterminated_string_still_tokenizes() {
    assert_eq!(lex("\"abc\\"), vec![(DELIM, "\""), (CONTENT, "abc\\")]);
}

#[test]
fn lone_dollar_is_an_error_token() {
    assert_eq!(
        lex("\"a$ b\""),
        vec![
            (DELIM, "\""),
            (CONTENT, "a"),
            (TokenKind::Error, "$"),
            (CONTENT, " b"),
            (DELIM, "\""),
        ]
    );
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn nested_block_comment() {
    assert_eq!(
        lex("#= a #= b =# c =#\nx"),
        vec![
            (BLOCK, "#= a #= b =# c =#"),
            (TokenKind::Whitespace, "\n"),
            (TokenKind::Identifier, "x"),
        ]
    );
}

#[test]
fn block_comment_after_whitespace_emits_trivia() {
    assert_eq!(
        lex("x  #= c =#"),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Whitespace, "  "),
            (BLOCK, "#= c =#"),
        ]
    );
}

#[test]
fn line_comment() {
    assert_eq!(
        lex("x # note\ny"),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Whitespace, " "),
            (TokenKind::LineComment, "# note"),
            (TokenKind::Whitespace, "\n"),
            (TokenKind::Identifier, "y"),
        ]
    );
}

#[test]
fn unterminated_block_comment_is_error() {
    assert_eq!(
        lex("x #= open"),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Error, "#= open"),
        ]
    );
}

// ─── Call Parens ───────────────────────────────────────────────

#[test]
fn call_gets_immediate_paren() {
    assert_eq!(
        lex("f(x)"),
        vec![
            (TokenKind::Identifier, "f"),
            (PAREN, ""),
            (TokenKind::Punct, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Punct, ")"),
        ]
    );
}

#[test]
fn juxtaposition_has_no_immediate_paren() {
    assert_eq!(
        lex("f (x)"),
        vec![
            (TokenKind::Identifier, "f"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Punct, "("),
            (TokenKind::Identifier, "x"),
            (TokenKind::Punct, ")"),
        ]
    );
}

#[test]
fn chained_calls() {
    let kinds: Vec<TokenKind> = lex("f(x)(y)").into_iter().map(|(k, _)| k).collect();
    assert_eq!(kinds.iter().filter(|k| **k == PAREN).count(), 2);
}

#[test]
fn operator_before_paren_is_not_a_call() {
    assert!(!lex("1+(2)").iter().any(|(k, _)| *k == PAREN));
}

// ─── Whole Stream ──────────────────────────────────────────────

#[test]
fn spans_tile_source() {
    let source = "function greet(name)\n    println(\"Hello, $name! \\\"\"\"\") #= hi =#\nend\n";
    let tokens = tokenize(source).unwrap_or_default();
    let mut pos = 0;
    for token in &tokens {
        assert_eq!(token.span.start, pos, "gap before {token:?}");
        pos = token.span.end;
    }
    assert_eq!(pos as usize, source.len());
}

#[test]
fn empty_source() {
    assert_eq!(tokenize(""), Ok(Vec::new()));
}

#[test]
fn stalled_error_message() {
    let err = TokenizeError::Stalled {
        offset: 7,
        kind: TokenType::StringContent,
    };
    assert_eq!(
        err.to_string(),
        "scanner produced an empty string_content token at byte 7"
    );
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_tokenize {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_source_tiles(source in "[\"$\\\\#=()a1 \n\té]{0,64}") {
            let tokens = tokenize(&source);
            prop_assert!(tokens.is_ok(), "{tokens:?}");
            let mut pos = 0u32;
            for token in tokens.unwrap_or_default() {
                prop_assert_eq!(token.span.start, pos);
                prop_assert!(token.span.end >= token.span.start);
                pos = token.span.end;
            }
            prop_assert_eq!(pos as usize, source.len());
        }
    }
}
