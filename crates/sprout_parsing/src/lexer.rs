//! Responsible for converting source text into a token stream

use crate::lexer::token_parsing::{parse_insignificant, parse_token};
use sprout_tokens::spanned::Span;
use sprout_tokens::token::{Token, TokenKind, TokenStream};
use std::borrow::Cow;
use std::io;
use std::path::Path;
use tracing::{debug, trace};

mod token_parsing;

/// Responsible for converting source text into tokens.
///
/// Scanning never fails: characters that start no token become [TokenKind::Unknown] tokens, and
/// the last token produced is always a single [TokenKind::Eof].
///
/// # Examples
/// ```
/// # use sprout_parsing::lexer::Lexer;
/// # use sprout_tokens::token::TokenKind;
/// let kinds = Lexer::new("int x;").map(|t| t.kind()).collect::<Vec<_>>();
/// assert_eq!(
///     kinds,
///     [TokenKind::Int, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]
/// );
/// ```
#[derive(Debug)]
pub struct Lexer<'s> {
    source: Cow<'s, str>,
    offset: usize,
    line: usize,
    col: usize,
    finished: bool,
}

impl Lexer<'static> {
    /// Creates a new lexer over the contents of a file
    pub fn read_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        debug!("read {} bytes from {path:?}", source.len());
        Ok(Self::from_cow(Cow::Owned(source)))
    }
}

impl<'s> Lexer<'s> {
    /// Creates a new lexer over borrowed source text
    pub fn new(source: &'s str) -> Self {
        Self::from_cow(Cow::Borrowed(source))
    }

    fn from_cow(source: Cow<'s, str>) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            col: 0,
            finished: false,
        }
    }

    /// The full source text of this lexer
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consumes the rest of this lexer into a token stream
    pub fn into_stream(self) -> TokenStream {
        self.collect()
    }

    fn advance(&mut self, len: usize) {
        for c in self.source[self.offset..self.offset + len].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
        self.offset += len;
    }

    fn next_token(&mut self) -> Token {
        let skipped = match parse_insignificant(&self.source[self.offset..]) {
            Ok((_, skipped)) => skipped.len(),
            Err(_) => 0,
        };
        self.advance(skipped);

        let rest = &self.source[self.offset..];
        if rest.is_empty() {
            self.finished = true;
            return Token::new(
                TokenKind::Eof,
                "EOF",
                Span::new(self.offset, 0, self.line, self.col),
            );
        }
        let (lexeme, kind) = match parse_token(rest) {
            Ok((_, (lexeme, kind))) => (lexeme.to_string(), kind),
            Err(_) => {
                let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                (rest[..len].to_string(), TokenKind::Unknown)
            }
        };
        let span = Span::new(self.offset, lexeme.len(), self.line, self.col);
        self.advance(lexeme.len());
        Token::new(kind, lexeme, span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        trace!("lexed {token:?}");
        Some(token)
    }
}

/// Converts source text into a token stream
pub fn tokenize(source: &str) -> TokenStream {
    Lexer::new(source).into_stream()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_tokens::spanned::Spanned;
    use std::io::Write;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("begin beginning end"),
            [
                TokenKind::Begin,
                TokenKind::Identifier,
                TokenKind::End,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_float_then_integer_dot() {
        let stream = tokenize("3.14 3.");
        let tokens = stream
            .iter()
            .map(|t| (t.kind(), t.lexeme()))
            .collect::<Vec<_>>();
        assert_eq!(
            tokens,
            [
                (TokenKind::FloatLiteral, "3.14"),
                (TokenKind::IntegerLiteral, "3"),
                (TokenKind::Unknown, "."),
                (TokenKind::Eof, "EOF"),
            ]
        );
    }

    #[test]
    fn test_lone_bang_is_unknown() {
        assert_eq!(
            kinds("! !="),
            [TokenKind::Unknown, TokenKind::Neq, TokenKind::Eof]
        );
    }

    #[test]
    fn test_comments_and_lines() {
        let stream = tokenize("int x; // the x\n\n  x = 1;");
        let x = &stream.tokens()[3];
        assert_eq!(x.lexeme(), "x");
        assert_eq!(x.line(), 3);
        assert_eq!(x.span().col(), 2);
        assert_eq!(x.span().offset(), 19);
        assert_eq!(stream.len(), 8);
    }

    #[test]
    fn test_empty_source() {
        let stream = tokenize("");
        assert!(stream.is_empty());
        assert_eq!(stream.tokens()[0].span(), Span::new(0, 0, 1, 0));
    }

    #[test]
    fn test_eof_at_end_of_input() {
        let stream = tokenize("end\n");
        let eof = stream.tokens().last().unwrap();
        assert_eq!(eof.kind(), TokenKind::Eof);
        assert_eq!(eof.lexeme(), "EOF");
        assert_eq!(eof.span().offset(), 4);
        assert_eq!(eof.line(), 2);
    }

    #[test]
    fn test_lexer_stops_after_eof() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next().map(|t| t.kind()), Some(TokenKind::Identifier));
        assert_eq!(lexer.next().map(|t| t.kind()), Some(TokenKind::Eof));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_non_ascii_is_one_unknown_token() {
        let stream = tokenize("é");
        assert_eq!(stream.tokens()[0].kind(), TokenKind::Unknown);
        assert_eq!(stream.tokens()[0].lexeme(), "é");
        assert_eq!(stream.tokens()[1].span().col(), 1);
    }

    #[test]
    fn test_read_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "begin end").unwrap();
        let lexer = Lexer::read_path(file.path()).unwrap();
        assert_eq!(lexer.source(), "begin end");
        assert_eq!(lexer.count(), 3);
    }

    #[test]
    fn test_read_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexer::read_path(dir.path().join("missing.lang")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
