use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::char;
use nom::combinator::{consumed, map, value};
use nom::error::{context, VerboseError};
use nom::IResult;
use tablisp_tokens::token::TokenKind;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parses a single non-structural token, giving back the text it was made from
pub fn parse_token(src: &str) -> Result<(&str, TokenKind)> {
    context(
        "token",
        consumed(alt((parse_word, parse_punctuation, parse_whitespace))),
    )(src)
}

/// Counts the tabs at the start of `src`
pub fn count_indentation(src: &str) -> usize {
    take_while::<_, _, VerboseError<&str>>(|c: char| c == '\t')(src)
        .map(|(_, tabs)| tabs.len())
        .unwrap_or(0)
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse_word(src: &str) -> Result<TokenKind> {
    context(
        "word",
        map(take_while1(is_word_char), |word: &str| match word {
            "do" => TokenKind::Do,
            "end" => TokenKind::End,
            _ => TokenKind::Word,
        }),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::LParen, char('(')),
            value(TokenKind::RParen, char(')')),
            value(TokenKind::Comma, char(',')),
            value(TokenKind::Newline, char('\n')),
        )),
    )(src)
}

/// A tab is only a space once it's past the leading indentation
fn parse_whitespace(src: &str) -> Result<TokenKind> {
    context(
        "whitespace",
        value(TokenKind::Space, alt((char(' '), char('\t')))),
    )(src)
}
