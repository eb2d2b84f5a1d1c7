use crate::lexer::LexingError;
use itertools::Itertools as _;
use std::fmt::{Display, Formatter};
use tablisp_tokens::spanned::Span;
use tablisp_tokens::token::TokenKind;
use tablisp_tokens::SpannedError;

/// Represents a problem found while parsing.
///
/// The parser reports these next to the tree it built, it never stops because of one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub struct SyntaxError {
    pub kind: SpannedError<ErrorKind>,
    pub non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(
        kind: ErrorKind,
        location: impl Into<Option<Span>>,
        non_terminals: Vec<&'static str>,
    ) -> Self {
        Self {
            kind: SpannedError::new(kind, location),
            non_terminal_stack: non_terminals,
        }
    }

    pub fn error_kind(&self) -> &ErrorKind {
        self.kind.error()
    }

    pub fn location(&self) -> Option<Span> {
        self.kind.location()
    }

    /// Renders this error with the source line it points at
    pub fn render(&self, src: &str) -> String {
        format!("syntax error: {}", self.kind.render(src))
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.kind)?;
        if f.alternate() && !self.non_terminal_stack.is_empty() {
            writeln!(f)?;
            writeln!(f, "non terminal stack:")?;
            for (idx, non_terminal) in self.non_terminal_stack.iter().enumerate() {
                writeln!(f, "  {}: {}", idx, non_terminal)?;
            }
        }
        Ok(())
    }
}

impl From<SpannedError<LexingError>> for SyntaxError {
    fn from(value: SpannedError<LexingError>) -> Self {
        Self::new(
            ErrorKind::Lex(value.error().clone()),
            value.location(),
            vec![],
        )
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("expected a token of kinds [{}], got {found}", .expected.iter().join(", "))]
    ExpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
    },
    #[error("unexpected token {0}")]
    UnexpectedToken(TokenKind),
    #[error("block is missing its `end`")]
    UnterminatedBlock,
    #[error(transparent)]
    Lex(#[from] LexingError),
}

impl ErrorKind {
    pub fn expected_token(
        token_kinds: impl IntoIterator<Item = TokenKind>,
        found: TokenKind,
    ) -> Self {
        Self::ExpectedToken {
            expected: token_kinds.into_iter().collect(),
            found,
        }
    }
}
