use super::*;

// === Navigation ===

#[test]
fn lookahead_returns_first_char() {
    let lexer = SourceLexer::new("abc");
    assert_eq!(lexer.lookahead(), 'a');
    assert_eq!(lexer.pos(), 0);
}

#[test]
fn advance_moves_by_utf8_width() {
    let mut lexer = SourceLexer::new("é\u{1F600}x");
    lexer.advance(false);
    assert_eq!(lexer.pos(), 2);
    assert_eq!(lexer.lookahead(), '\u{1F600}');
    lexer.advance(false);
    assert_eq!(lexer.pos(), 6);
    assert_eq!(lexer.lookahead(), 'x');
}

#[test]
fn advance_at_eof_is_a_no_op() {
    let mut lexer = SourceLexer::new("a");
    lexer.advance(false);
    assert!(lexer.is_eof());
    lexer.advance(false);
    assert_eq!(lexer.pos(), 1);
    assert_eq!(lexer.lookahead(), '\0');
}

// === EOF Detection ===

#[test]
fn empty_source_is_eof() {
    let lexer = SourceLexer::new("");
    assert!(lexer.is_eof());
    assert_eq!(lexer.lookahead(), '\0');
}

#[test]
fn interior_null_is_not_eof() {
    let mut lexer = SourceLexer::new("a\0b");
    lexer.advance(false);
    assert_eq!(lexer.lookahead(), '\0');
    assert!(!lexer.is_eof());
    lexer.advance(false);
    assert_eq!(lexer.lookahead(), 'b');
}

// === Token Extent ===

#[test]
fn finish_without_mark_ends_at_cursor() {
    let mut lexer = SourceLexer::new("abc");
    lexer.advance(false);
    lexer.advance(false);
    assert_eq!(lexer.finish(), Span::new(0, 2));
}

#[test]
fn finish_uses_last_mark() {
    let mut lexer = SourceLexer::new("abcd");
    lexer.advance(false);
    lexer.mark_end();
    lexer.advance(false);
    lexer.advance(false);
    assert_eq!(lexer.marked_end(), Some(1));
    assert_eq!(lexer.finish(), Span::new(0, 1));
}

#[test]
fn skip_advance_moves_token_start() {
    let mut lexer = SourceLexer::new("  ab");
    lexer.advance(true);
    lexer.advance(true);
    assert_eq!(lexer.token_start(), 2);
    lexer.advance(false);
    assert_eq!(lexer.finish(), Span::new(2, 3));
}

#[test]
fn reset_to_rewinds_and_clears_mark() {
    let mut lexer = SourceLexer::new("hello");
    lexer.advance(false);
    lexer.mark_end();
    lexer.advance(false);
    lexer.reset_to(1);
    assert_eq!(lexer.pos(), 1);
    assert_eq!(lexer.token_start(), 1);
    assert_eq!(lexer.marked_end(), None);
    assert_eq!(lexer.lookahead(), 'e');
}

// === Slicing ===

#[test]
fn slice_and_rest() {
    let mut lexer = SourceLexer::new("hello world");
    assert_eq!(lexer.slice(Span::new(6, 11)), "world");
    lexer.reset_to(6);
    assert_eq!(lexer.rest(), "world");
}

#[test]
fn eat_while_stops_at_predicate_and_eof() {
    let mut lexer = SourceLexer::new("aaab");
    assert_eq!(lexer.eat_while(|c| c == 'a'), 3);
    assert_eq!(lexer.lookahead(), 'b');
    assert_eq!(lexer.eat_while(|_| true), 1);
    assert!(lexer.is_eof());
    // token start is untouched by eat_while
    assert_eq!(lexer.token_start(), 0);
}

#[test]
fn span_helpers() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::new(5, 5).is_empty());
    assert_eq!(format!("{span}"), "3..7");
    assert_eq!(format!("{span:?}"), "3..7");
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate_to_char_boundary("héllo", 2), "h");
    assert_eq!(truncate_to_char_boundary("héllo", 3), "hé");
    assert_eq!(truncate_to_char_boundary("abc", 10), "abc");
}
