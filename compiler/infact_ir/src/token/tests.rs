use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_double_bits_round_trip() {
    let kind = TokenKind::double(2.5);
    assert_eq!(kind.as_f64(), Some(2.5));
    assert_eq!(TokenKind::Int(3).as_f64(), None);
}

#[test]
fn test_ident_helpers() {
    let kind = TokenKind::Ident("import".to_string());
    assert!(kind.is_ident("import"));
    assert!(!kind.is_ident("null"));
    assert_eq!(kind.ident(), Some("import"));
    assert_eq!(TokenKind::Semicolon.ident(), None);
}

#[test]
fn test_is_literal() {
    assert!(TokenKind::Bool(true).is_literal());
    assert!(TokenKind::Str("x".to_string()).is_literal());
    assert!(!TokenKind::Ident("x".to_string()).is_literal());
    assert!(!TokenKind::LBrace.is_literal());
}

#[test]
fn test_display_mentions_lexeme() {
    assert_eq!(
        TokenKind::Ident("foo".to_string()).to_string(),
        "identifier `foo`"
    );
    assert_eq!(TokenKind::Semicolon.to_string(), "`;`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
    assert_eq!(
        TokenKind::Error(LexErrorKind::UnexpectedChar('#')).to_string(),
        "invalid token (unrecognized character '#')"
    );
}

#[test]
fn test_token_list_indexing() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Int(1), Span::new(0, 1)));
    list.push(Token::new(TokenKind::Eof, Span::point(1)));

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].kind, TokenKind::Int(1));
    assert_eq!(list.last().map(|t| &t.kind), Some(&TokenKind::Eof));
    assert_eq!(list.iter().count(), 2);
}
