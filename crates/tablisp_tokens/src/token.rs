//! A lexical token from source text, along with streams for said token

use crate::spanned::{Span, Spanned};
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::iter;

/// A lexical token from source text
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a new token
    pub fn new(span: Span, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            span,
            kind,
            text: text.into(),
        }
    }

    /// Creates a structural token, which has no text
    pub fn structural(span: Span, kind: TokenKind) -> Self {
        Self::new(span, kind, "")
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the source text of this token. Empty for `INDENT`, `DEDENT` and `EOF`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes this token, giving back its text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}:{}",
            self.kind,
            self.text,
            self.span.line(),
            self.span.column()
        )
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind for this token
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIs)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// a run of `[A-Za-z0-9_]`
    Word,
    /// the indentation depth increased by at least one tab
    Indent,
    /// one level of indentation was closed
    Dedent,
    /// new line
    Newline,
    #[strum(serialize = "LPAREN")]
    LParen,
    #[strum(serialize = "RPAREN")]
    RParen,
    Comma,
    /// a space, or a tab that is not leading indentation
    Space,
    /// the `do` keyword
    Do,
    /// the `end` keyword
    End,
    /// EOF, will only appear at the end of a token stream
    Eof,
}

impl TokenKind {
    /// Whether tokens of this kind encode layout rather than content
    pub fn is_structural(&self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline)
    }
}

/// A stream of tokens
#[derive(Debug, Clone)]
pub struct TokenStream(VecDeque<Token>);

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream {
    #[inline]
    pub fn new() -> Self {
        TokenStream::from_iter(iter::empty())
    }

    /// Peeks the next token without consuming it
    pub fn peek(&self) -> Option<&Token> {
        self.0.front()
    }

    /// Peeks `n` tokens ahead, `peek_nth(0)` being [peek](Self::peek)
    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.0.get(n)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
