//! The `lex` command: print a file's token stream.

use std::fmt::Write;

use infact_ir::{LineTable, TokenKind};

use super::read_file;

/// One `line:col  kind` row per token, ending with `Eof`.
pub fn format_tokens(source: &str) -> String {
    let tokens = infact_lexer::lex(source);
    let lines = LineTable::build(source);

    let mut out = String::new();
    for token in &tokens {
        let (line, col) = lines.line_col(source, token.span.start);
        let _ = writeln!(out, "{:>4}:{:<3} {}", line, col, token.kind);
    }
    out
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = infact_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    print!("{}", format_tokens(&content));

    if tokens
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Error(_)))
    {
        std::process::exit(1);
    }
}
