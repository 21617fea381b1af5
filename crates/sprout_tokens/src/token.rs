//! A lexical token from a source file, along with streams for said token

use crate::spanned::{Span, Spanned};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};

/// A lexical token from a source file
#[derive(Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

impl Token {
    /// Creates a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the exact source text of this token
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The 1-based line this token appears on
    pub fn line(&self) -> usize {
        self.span.line()
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.lexeme, self.span.line())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.lexeme, self.kind)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// The kind for this token.
///
/// The display form is the upper case name used in diagnostics, ie `INTEGER_LITERAL`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Begin,
    End,

    Int,
    Float,

    If,
    Then,
    Endif,
    Else,
    Endelse,
    While,
    Do,
    Endwhile,

    Print,
    Scan,

    Function,
    Procedure,
    Return,

    #[strum(serialize = "LPAREN")]
    LParen,
    #[strum(serialize = "RPAREN")]
    RParen,
    Comma,
    Semicolon,

    Plus,
    Minus,
    Asterisk,
    Slash,

    /// =
    Assign,
    /// ==
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
    /// !=
    Neq,

    Identifier,

    IntegerLiteral,
    FloatLiteral,

    /// EOF, will only appear at the end of a token stream
    Eof,
    /// A character the lexer does not recognize
    Unknown,
}

impl TokenKind {
    /// The fixed source spelling of this kind, if it has one
    pub fn spelling(&self) -> Option<&'static str> {
        use TokenKind::*;
        let s = match self {
            Begin => "begin",
            End => "end",
            Int => "int",
            Float => "float",
            If => "if",
            Then => "then",
            Endif => "endif",
            Else => "else",
            Endelse => "endelse",
            While => "while",
            Do => "do",
            Endwhile => "endwhile",
            Print => "print",
            Scan => "scan",
            Function => "function",
            Procedure => "procedure",
            Return => "return",
            LParen => "(",
            RParen => ")",
            Comma => ",",
            Semicolon => ";",
            Plus => "+",
            Minus => "-",
            Asterisk => "*",
            Slash => "/",
            Assign => "=",
            Eq => "==",
            Lt => "<",
            Lte => "<=",
            Gt => ">",
            Gte => ">=",
            Neq => "!=",
            Identifier | IntegerLiteral | FloatLiteral | Eof | Unknown => return None,
        };
        Some(s)
    }

    /// Describes this kind for a human, quoting fixed spellings
    pub fn describe(&self) -> String {
        match self.spelling() {
            Some(spelling) => format!("'{spelling}'"),
            None => match self {
                TokenKind::Identifier => "an identifier".to_string(),
                TokenKind::IntegerLiteral => "an integer literal".to_string(),
                TokenKind::FloatLiteral => "a float literal".to_string(),
                TokenKind::Eof => "end of input".to_string(),
                _ => "an unknown character".to_string(),
            },
        }
    }

    /// Describes a set of alternatives, ie `'int' or 'float'`
    pub fn describe_any(kinds: &[TokenKind]) -> String {
        kinds.iter().map(TokenKind::describe).join(" or ")
    }
}

/// A finite stream of tokens that always ends with a single [TokenKind::Eof] token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStream(Vec<Token>);

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        let mut tokens = iter
            .into_iter()
            .take_while_inclusive(|token| token.kind() != TokenKind::Eof)
            .collect::<Vec<_>>();
        if tokens.last().map(|t| t.kind()) != Some(TokenKind::Eof) {
            let span = tokens
                .last()
                .map(|t| t.span().end())
                .unwrap_or(Span::new(0, 0, 1, 0));
            tokens.push(Token::new(TokenKind::Eof, "EOF", span));
        }
        Self(tokens)
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream {
    /// Creates a stream containing only the end marker
    #[inline]
    pub fn new() -> Self {
        TokenStream::from_iter(std::iter::empty())
    }

    /// All tokens, end marker included
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// An iterator over all tokens, end marker included
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// The number of tokens, end marker included
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stream has nothing but the end marker
    pub fn is_empty(&self) -> bool {
        self.0.len() == 1
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, lexeme: &str, offset: usize) -> Token {
        Token::new(kind, lexeme, Span::new(offset, lexeme.len(), 1, offset))
    }

    #[test]
    fn test_empty_token_stream_has_eof() {
        let stream = TokenStream::new();
        assert!(stream.is_empty());
        assert_eq!(stream.tokens()[0].kind(), TokenKind::Eof);
        assert_eq!(stream.tokens()[0].lexeme(), "EOF");
    }

    #[test]
    fn test_eof_appended_after_last_token() {
        let stream = TokenStream::from_iter([token(TokenKind::Begin, "begin", 0)]);
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.tokens()[1].kind(), TokenKind::Eof);
        assert_eq!(stream.tokens()[1].span().offset(), 5);
    }

    #[test]
    fn test_tokens_after_eof_are_dropped() {
        let stream = TokenStream::from_iter([
            token(TokenKind::Eof, "EOF", 0),
            token(TokenKind::Begin, "begin", 0),
        ]);
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::IntegerLiteral.to_string(), "INTEGER_LITERAL");
        assert_eq!(TokenKind::LParen.to_string(), "LPAREN");
        assert_eq!(TokenKind::Semicolon.to_string(), "SEMICOLON");
        assert_eq!(TokenKind::Endwhile.to_string(), "ENDWHILE");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_describe_any() {
        assert_eq!(
            TokenKind::describe_any(&[TokenKind::Int, TokenKind::Float]),
            "'int' or 'float'"
        );
        assert_eq!(TokenKind::Identifier.describe(), "an identifier");
    }

    #[test]
    fn test_token_display() {
        let t = token(TokenKind::Identifier, "x", 0);
        assert_eq!(t.to_string(), "'x' (IDENTIFIER)");
    }
}
