//! The call grammar.
//!
//! Statement positions are the top level, the lines of a `do ... end` block and indented lines.
//! Argument positions are the inside of parentheses and the rest of the line after an implicit
//! call's name. A word in an argument position only becomes a call when `(` follows it directly.

use crate::parser::{ErrorKind, Parsed, Parser};
use tablisp_ast::Node;
use tablisp_tokens::token::TokenKind;

impl Parser {
    /// Parses every top level expression.
    ///
    /// Zero expressions give no root, one is the root itself, and more are wrapped in an
    /// anonymous list in source order.
    pub fn parse_program(mut self) -> Parsed {
        let mut expressions = self.parse("program", |parser| {
            let mut expressions = vec![];
            loop {
                match parser.peek_kind() {
                    TokenKind::Eof => break,
                    // layout without an owning call
                    TokenKind::Newline
                    | TokenKind::Space
                    | TokenKind::Indent
                    | TokenKind::Dedent => {
                        parser.consume();
                    }
                    _ => expressions.extend(parser.parse_expression()),
                }
            }
            expressions
        });
        let root = match expressions.len() {
            0 => None,
            1 => expressions.pop(),
            _ => Some(Node::sequence(expressions)),
        };
        self.finish(root)
    }

    /// Parses one expression in a statement position.
    ///
    /// Gives back `None` at `EOF`, or when the lookahead can not start an expression. In the
    /// latter case the lookahead is consumed.
    pub(in crate::parser) fn parse_expression(&mut self) -> Option<Node> {
        self.parse("expression", |parser| match parser.peek_kind() {
            TokenKind::Word => {
                let word = parser.consume_text();
                Some(match parser.peek_kind() {
                    TokenKind::LParen => parser.parse_explicit_call(word),
                    TokenKind::Do => parser.parse_block_call(word),
                    TokenKind::Space => parser.parse_implicit_call(word),
                    // a bare word is a reference, never a call
                    _ => Node::Item(word),
                })
            }
            TokenKind::LParen => Some(parser.parse_list_literal()),
            TokenKind::Eof => None,
            _ => {
                parser.unexpected();
                None
            }
        })
    }

    /// `name(a, b)`, the cursor being on the `(`
    fn parse_explicit_call(&mut self, name: String) -> Node {
        self.parse("explicit call", |parser| {
            Node::call(name, parser.parse_parenthesized())
        })
    }

    /// `(a, b)`, the cursor being on the `(`
    fn parse_list_literal(&mut self) -> Node {
        self.parse("list literal", |parser| {
            Node::list_literal(parser.parse_parenthesized())
        })
    }

    /// `name do ... end`, the cursor being on the `do`
    fn parse_block_call(&mut self, name: String) -> Node {
        self.parse("block call", |parser| {
            parser.consume();
            Node::call(name, parser.parse_block())
        })
    }

    /// `name a b`, the cursor being on the space after the name.
    ///
    /// After the arguments on the line, a `do` appends its block's nodes as further arguments,
    /// and a newline followed by an indent makes every indented line one more argument.
    fn parse_implicit_call(&mut self, name: String) -> Node {
        self.parse("implicit call", |parser| {
            let mut args = parser.parse_inline_arguments();
            match parser.peek_kind() {
                TokenKind::Do => {
                    parser.consume();
                    args.extend(parser.parse_block());
                }
                TokenKind::Newline if parser.peek_nth_kind(1) == TokenKind::Indent => {
                    parser.consume();
                    parser.consume();
                    args.extend(parser.parse_indented());
                }
                _ => {}
            }
            Node::call(name, args)
        })
    }

    /// One argument: a nested explicit call, a reference or a list literal.
    ///
    /// Consumes nothing and gives back `None` if the lookahead can not start an argument.
    fn parse_argument(&mut self) -> Option<Node> {
        match self.peek_kind() {
            TokenKind::Word => {
                let word = self.consume_text();
                if self.at(TokenKind::LParen) {
                    Some(self.parse_explicit_call(word))
                } else {
                    Some(Node::Item(word))
                }
            }
            TokenKind::LParen => Some(self.parse_list_literal()),
            _ => None,
        }
    }

    /// Space separated arguments up to the first token that can not start one, which is left
    /// for the caller. A `(` here starts a list literal, so `f (a, b)` passes one list.
    fn parse_inline_arguments(&mut self) -> Vec<Node> {
        self.parse("arguments", |parser| {
            let mut args = vec![];
            loop {
                if parser.consume_if(TokenKind::Space).is_some() {
                    continue;
                }
                match parser.parse_argument() {
                    Some(arg) => args.push(arg),
                    None => break,
                }
            }
            args
        })
    }

    /// Arguments between `(` and `)`, the cursor being on the `(`.
    ///
    /// Commas and spaces separate arguments. Line breaks and indentation inside the parentheses
    /// are ignored.
    fn parse_parenthesized(&mut self) -> Vec<Node> {
        self.consume();
        let mut args = vec![];
        loop {
            match self.peek_kind() {
                TokenKind::RParen => {
                    self.consume();
                    break;
                }
                TokenKind::Comma
                | TokenKind::Space
                | TokenKind::Newline
                | TokenKind::Indent
                | TokenKind::Dedent => {
                    self.consume();
                }
                TokenKind::Eof => {
                    self.expected([TokenKind::RParen]);
                    break;
                }
                _ => match self.parse_argument() {
                    Some(arg) => args.push(arg),
                    None => self.unexpected(),
                },
            }
        }
        args
    }

    /// The contents of a `do ... end` block, the cursor being after the `do`. The `end` is
    /// consumed.
    ///
    /// Arguments on the same line as the `do` come first. Then every line is one expression, and
    /// an indented run of lines becomes one list literal.
    fn parse_block(&mut self) -> Vec<Node> {
        self.parse("block", |parser| {
            let mut nodes = parser.parse_inline_arguments();
            parser.consume_if(TokenKind::Newline);
            loop {
                match parser.peek_kind() {
                    TokenKind::End => {
                        parser.consume();
                        break;
                    }
                    TokenKind::Eof => {
                        parser.error(ErrorKind::UnterminatedBlock);
                        break;
                    }
                    TokenKind::Newline | TokenKind::Space | TokenKind::Dedent => {
                        parser.consume();
                    }
                    TokenKind::Indent => {
                        parser.consume();
                        nodes.extend(parser.parse_group());
                    }
                    _ => nodes.extend(parser.parse_expression()),
                }
            }
            nodes
        })
    }

    /// One expression per line until the `DEDENT` closing this level, the cursor being after the
    /// `INDENT`. The `DEDENT` is consumed.
    ///
    /// Stops early, without consuming, at an `end` so that an enclosing block keeps it. A deeper
    /// indent that no expression claimed becomes one list literal.
    fn parse_indented(&mut self) -> Vec<Node> {
        self.parse("indented lines", |parser| {
            let mut nodes = vec![];
            loop {
                match parser.peek_kind() {
                    TokenKind::Dedent => {
                        parser.consume();
                        break;
                    }
                    TokenKind::End | TokenKind::Eof => break,
                    TokenKind::Newline | TokenKind::Space => {
                        parser.consume();
                    }
                    TokenKind::Indent => {
                        parser.consume();
                        nodes.extend(parser.parse_group());
                    }
                    _ => nodes.extend(parser.parse_expression()),
                }
            }
            nodes
        })
    }

    /// An indented run of lines as a single list literal, `None` if the run was empty
    fn parse_group(&mut self) -> Option<Node> {
        let nodes = self.parse_indented();
        if nodes.is_empty() {
            None
        } else {
            Some(Node::list_literal(nodes))
        }
    }
}
