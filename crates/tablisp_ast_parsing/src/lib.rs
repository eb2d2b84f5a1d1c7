#![doc = include_str!("../README.md")]

use crate::lexer::Lexer;
use crate::parser::{Parsed, Parser, SyntaxError};
use tablisp_ast::Node;
use tablisp_tokens::token::Token;

pub mod lexer;
pub mod parser;

/// Tokenizes the whole source, ending with exactly one `EOF` token.
///
/// Unrecognized characters are dropped silently. Use [Lexer] directly to see them.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}

/// Parses a token stream into its root node, discarding diagnostics.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Option<Node> {
    Parser::new(tokens).parse_program().root
}

/// Lexes and parses the source, keeping the diagnostics of both stages ordered by where they were
/// found.
pub fn parse_source(src: &str) -> Parsed {
    let mut lexer = Lexer::new(src);
    let tokens = lexer.by_ref().collect::<Vec<_>>();
    let mut parsed = Parser::new(tokens).parse_program();
    parsed
        .errors
        .extend(lexer.into_errors().into_iter().map(SyntaxError::from));
    parsed
        .errors
        .sort_by_key(|error| error.location().map(|span| span.offset()));
    parsed
}
