use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_while, take_while1};
use nom::character::complete::{anychar, char, digit1, satisfy};
use nom::combinator::{all_consuming, consumed, map_parser, recognize, value};
use nom::error::{context, VerboseError};
use nom::multi::many0_count;
use nom::sequence::{pair, tuple};
use nom::IResult;
use sprout_tokens::token::TokenKind;

type Result<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Parses whitespace and line comments, returning everything skipped
pub fn parse_insignificant(src: &str) -> Result<'_, &str> {
    context(
        "insignificant",
        recognize(many0_count(alt((parse_whitespace, parse_comment)))),
    )(src)
}

fn parse_whitespace(src: &str) -> Result<'_, &str> {
    take_while1(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'))(src)
}

fn parse_comment(src: &str) -> Result<'_, &str> {
    context(
        "comment",
        recognize(pair(tag("//"), take_till(|c: char| c == '\n'))),
    )(src)
}

/// Parses a single token, returning its lexeme and kind.
///
/// Any character that starts no other token is an [TokenKind::Unknown] token on its own, so this
/// only fails on empty input.
pub fn parse_token(src: &str) -> Result<'_, (&str, TokenKind)> {
    context(
        "token",
        consumed(alt((
            parse_word,
            parse_number,
            parse_operator,
            parse_punctuation,
            parse_unknown,
        ))),
    )(src)
}

fn recognize_identifier(src: &str) -> Result<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(src)
}

fn parse_word(src: &str) -> Result<'_, TokenKind> {
    context(
        "word",
        map_parser(recognize_identifier, parse_keyword_or_identifier),
    )(src)
}

fn parse_keyword_or_identifier(word: &str) -> Result<'_, TokenKind> {
    alt((parse_keyword, value(TokenKind::Identifier, recognize_identifier)))(word)
}

fn all_consuming_tag(src: &str) -> impl FnMut(&str) -> Result<'_, &str> + '_ {
    move |i| all_consuming(tag(src))(i)
}

fn parse_keyword(src: &str) -> Result<'_, TokenKind> {
    context(
        "keyword",
        alt((
            alt((
                value(TokenKind::Begin, all_consuming_tag("begin")),
                value(TokenKind::End, all_consuming_tag("end")),
                value(TokenKind::Int, all_consuming_tag("int")),
                value(TokenKind::Float, all_consuming_tag("float")),
                value(TokenKind::If, all_consuming_tag("if")),
                value(TokenKind::Then, all_consuming_tag("then")),
                value(TokenKind::Endif, all_consuming_tag("endif")),
                value(TokenKind::Else, all_consuming_tag("else")),
                value(TokenKind::Endelse, all_consuming_tag("endelse")),
            )),
            alt((
                value(TokenKind::While, all_consuming_tag("while")),
                value(TokenKind::Do, all_consuming_tag("do")),
                value(TokenKind::Endwhile, all_consuming_tag("endwhile")),
                value(TokenKind::Print, all_consuming_tag("print")),
                value(TokenKind::Scan, all_consuming_tag("scan")),
                value(TokenKind::Function, all_consuming_tag("function")),
                value(TokenKind::Procedure, all_consuming_tag("procedure")),
                value(TokenKind::Return, all_consuming_tag("return")),
            )),
        )),
    )(src)
}

fn parse_number(src: &str) -> Result<'_, TokenKind> {
    context(
        "number",
        alt((
            value(
                TokenKind::FloatLiteral,
                recognize(tuple((digit1, char('.'), digit1))),
            ),
            value(TokenKind::IntegerLiteral, digit1),
        )),
    )(src)
}

fn parse_operator(src: &str) -> Result<'_, TokenKind> {
    context(
        "operator",
        alt((
            value(TokenKind::Eq, tag("==")),
            value(TokenKind::Neq, tag("!=")),
            value(TokenKind::Lte, tag("<=")),
            value(TokenKind::Gte, tag(">=")),
            value(TokenKind::Assign, char('=')),
            value(TokenKind::Lt, char('<')),
            value(TokenKind::Gt, char('>')),
            value(TokenKind::Plus, char('+')),
            value(TokenKind::Minus, char('-')),
            value(TokenKind::Asterisk, char('*')),
            value(TokenKind::Slash, char('/')),
        )),
    )(src)
}

fn parse_punctuation(src: &str) -> Result<'_, TokenKind> {
    context(
        "punctuation",
        alt((
            value(TokenKind::LParen, char('(')),
            value(TokenKind::RParen, char(')')),
            value(TokenKind::Comma, char(',')),
            value(TokenKind::Semicolon, char(';')),
        )),
    )(src)
}

fn parse_unknown(src: &str) -> Result<'_, TokenKind> {
    context("unknown", value(TokenKind::Unknown, anychar))(src)
}
