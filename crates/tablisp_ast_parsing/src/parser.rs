//! parser used for creating the AST

use tablisp_ast::Node;
use tablisp_tokens::spanned::{Span, Spanned};
use tablisp_tokens::token::{Token, TokenKind, TokenStream};
use tracing::{debug, trace};

pub mod error;
mod expr;

pub use error::{ErrorKind, SyntaxError};

/// The outcome of parsing a token stream
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// `None` when there were no expressions
    pub root: Option<Node>,
    /// Every problem found, ordered by where it was found
    pub errors: Vec<SyntaxError>,
}

impl Parsed {
    /// Whether the source parsed without any diagnostics
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Creates the syntax tree from a token stream.
///
/// The parser moves through the tokens with a single forward cursor and one token of lookahead
/// (two when deciding whether a newline starts an indented continuation). It never backtracks and
/// never fails: every token the grammar has no place for is consumed and reported as a
/// [SyntaxError], so parsing always reaches `EOF`.
///
/// # Examples
/// ```
/// # use tablisp_ast::Node;
/// # use tablisp_ast_parsing::lexer::Lexer;
/// # use tablisp_ast_parsing::parser::Parser;
/// let parsed = Parser::new(Lexer::new("plus 1 2")).parse_program();
/// assert_eq!(
///     parsed.root,
///     Some(Node::call("plus", [Node::item("1"), Node::item("2")]))
/// );
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: TokenStream,
    last_span: Option<Span>,
    non_terminals: Vec<&'static str>,
    errors: Vec<SyntaxError>,
}

impl Parser {
    /// Creates a new parser over the given tokens
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            last_span: None,
            non_terminals: vec![],
            errors: vec![],
        }
    }

    /// peek the current lookahead
    pub(in crate::parser) fn peek(&self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// The kind of the current lookahead. Running out of tokens reads as `EOF`.
    pub(in crate::parser) fn peek_kind(&self) -> TokenKind {
        self.peek_nth_kind(0)
    }

    pub(in crate::parser) fn peek_nth_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .peek_nth(n)
            .map(Token::kind)
            .unwrap_or(TokenKind::Eof)
    }

    pub(in crate::parser) fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(in crate::parser) fn consume(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        trace!("consumed {token:?}");
        self.last_span = Some(token.span());
        Some(token)
    }

    /// consumes if the lookahead is of the given kind
    pub(in crate::parser) fn consume_if(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            self.consume()
        } else {
            None
        }
    }

    /// Consumes the lookahead, giving back its text
    pub(in crate::parser) fn consume_text(&mut self) -> String {
        self.consume().map(Token::into_text).unwrap_or_default()
    }

    /// Wrapper function for parsing a non-terminal, keeping track of the non-terminal stack
    #[inline]
    pub(in crate::parser) fn parse<O, F>(&mut self, non_terminal: &'static str, parser: F) -> O
    where
        F: FnOnce(&mut Self) -> O,
    {
        trace!("starting parsing {non_terminal} at {:?}", self.peek());
        self.non_terminals.push(non_terminal);
        let output = parser(self);
        self.non_terminals.pop();
        trace!("after parsing {non_terminal} at {:?}", self.peek());
        output
    }

    /// Records an error at the lookahead, or just after the last consumed token
    pub(in crate::parser) fn error(&mut self, kind: impl Into<ErrorKind>) {
        let span = self
            .peek()
            .map(Spanned::span)
            .or_else(|| self.last_span.map(|span| span.end()));
        let error = SyntaxError::new(kind.into(), span, self.non_terminals.clone());
        debug!("{error}");
        self.errors.push(error);
    }

    /// Records that the lookahead was not one of `expected`, without consuming it
    pub(in crate::parser) fn expected(&mut self, expected: impl IntoIterator<Item = TokenKind>) {
        let found = self.peek_kind();
        self.error(ErrorKind::expected_token(expected, found));
    }

    /// Consumes a token the grammar has no place for, recording it
    pub(in crate::parser) fn unexpected(&mut self) {
        if self.peek().is_some() {
            let kind = self.peek_kind();
            self.error(ErrorKind::UnexpectedToken(kind));
            self.consume();
        }
    }

    /// Gets if this parser is at EOF
    pub fn eof(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    fn finish(self, root: Option<Node>) -> Parsed {
        Parsed {
            root,
            errors: self.errors,
        }
    }
}
