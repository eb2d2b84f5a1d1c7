//! Responsible with converting source text into a token stream

use crate::lexer::token_parsing::{count_indentation, parse_token};
use std::collections::VecDeque;
use tablisp_tokens::spanned::Span;
use tablisp_tokens::token::{Token, TokenKind};
use tablisp_tokens::SpannedError;
use thiserror::Error;
use tracing::{debug, trace};

mod token_parsing;

/// Responsible with converting source text into a token stream.
///
/// Leading tabs of a line are compared against a stack of open indentation depths, producing
/// `INDENT` when a line is deeper than the last, and one `DEDENT` per closed depth when it is
/// shallower. Leading spaces never count. All open depths are closed before the final `EOF`.
///
/// The lexer never fails. Characters it does not recognize are dropped, and recorded in
/// [errors](Lexer::errors).
///
/// # Examples
/// ```
/// # use tablisp_ast_parsing::lexer::Lexer;
/// # use tablisp_tokens::token::TokenKind;
/// let kinds = Lexer::new("f a\n\tb")
///     .map(|token| token.kind())
///     .collect::<Vec<_>>();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Word,
///         TokenKind::Space,
///         TokenKind::Word,
///         TokenKind::Newline,
///         TokenKind::Indent,
///         TokenKind::Word,
///         TokenKind::Dedent,
///         TokenKind::Eof,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'s> {
    src: &'s str,
    offset: usize,
    line: usize,
    column: usize,
    indent_stack: Vec<usize>,
    at_line_start: bool,
    pending: VecDeque<Token>,
    finished: bool,
    errors: Vec<SpannedError<LexingError>>,
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            offset: 0,
            line: 0,
            column: 0,
            indent_stack: vec![0],
            at_line_start: true,
            pending: VecDeque::new(),
            finished: false,
            errors: vec![],
        }
    }

    /// The characters dropped so far
    pub fn errors(&self) -> &[SpannedError<LexingError>] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SpannedError<LexingError>> {
        self.errors
    }

    /// The number of indentation levels currently open
    pub fn depth(&self) -> usize {
        self.indent_stack.len() - 1
    }

    fn advance(&mut self) {
        let src = self.src;
        let rest = &src[self.offset..];
        if rest.is_empty() {
            self.finish();
        } else if self.at_line_start {
            self.measure_indentation(rest);
        } else {
            match parse_token(rest) {
                Ok((_, (text, kind))) => self.emit(kind, text),
                Err(_) => self.drop_char(rest),
            }
        }
    }

    fn measure_indentation(&mut self, rest: &str) {
        let indent = count_indentation(rest);
        let current = self.indent_stack.last().copied().unwrap_or(0);
        let span = Span::empty(self.offset, self.line, 0);
        if indent > current {
            trace!("line {} indented to {indent}", self.line);
            self.indent_stack.push(indent);
            self.pending.push_back(Token::structural(span, TokenKind::Indent));
        } else {
            while self.indent_stack.len() > 1
                && self.indent_stack.last().is_some_and(|top| *top > indent)
            {
                trace!("line {} dedented to {indent}", self.line);
                self.indent_stack.pop();
                self.pending.push_back(Token::structural(span, TokenKind::Dedent));
            }
        }
        // tabs are single byte
        self.offset += indent;
        self.column += indent;
        self.at_line_start = false;
    }

    fn emit(&mut self, kind: TokenKind, text: &str) {
        let span = Span::new(self.offset, text.len(), self.line, self.column);
        self.pending.push_back(Token::new(span, kind, text));
        self.offset += text.len();
        if kind == TokenKind::Newline {
            self.line += 1;
            self.column = 0;
            self.at_line_start = true;
        } else {
            self.column += text.chars().count();
        }
    }

    fn drop_char(&mut self, rest: &str) {
        let Some(c) = rest.chars().next() else {
            return;
        };
        let span = Span::new(self.offset, c.len_utf8(), self.line, self.column);
        debug!(
            "dropping unrecognized char {c:?} at {}:{}",
            self.line, self.column
        );
        self.errors
            .push(SpannedError::new(LexingError::InvalidChar(c), span));
        self.offset += c.len_utf8();
        self.column += 1;
    }

    fn finish(&mut self) {
        let span = Span::empty(self.offset, self.line, self.column);
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.pending.push_back(Token::structural(span, TokenKind::Dedent));
        }
        self.pending.push_back(Token::structural(span, TokenKind::Eof));
        self.finished = true;
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            self.advance();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexingError {
    /// Invalid char
    #[error("invalid char: {0:?}")]
    InvalidChar(char),
}
