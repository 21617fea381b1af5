use sprout_ast::scope::ScopeError;
use sprout_ast::symbol::SymbolKind;
use sprout_tokens::spanned::{Span, Spanned};
use sprout_tokens::token::{Token, TokenKind};
use std::fmt::{Display, Formatter};

/// Represents an error occurring during parsing. The first error aborts the parse.
#[derive(Debug, thiserror::Error)]
pub struct SyntaxError {
    kind: ErrorKind,
    span: Span,
    non_terminal_stack: Vec<&'static str>,
}

impl SyntaxError {
    /// Creates a new error
    pub fn new(kind: ErrorKind, span: Span, non_terminals: impl Into<Vec<&'static str>>) -> Self {
        Self {
            kind,
            span,
            non_terminal_stack: non_terminals.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The 1-based line the error occurred on
    pub fn line(&self) -> usize {
        self.span.line()
    }

    /// The grammar productions being parsed when the error occurred, outermost first
    pub fn non_terminal_stack(&self) -> &[&'static str] {
        &self.non_terminal_stack
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl Spanned for SyntaxError {
    fn span(&self) -> Span {
        self.span
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} error on line {}: {}",
            self.category(),
            self.line(),
            self.kind
        )
    }
}

/// [SyntaxError] kind
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unknown character '{0}'")]
    UnknownCharacter(String),
    #[error("expected {expected}, found {found}")]
    ExpectedToken { expected: String, found: Token },
    #[error(
        "expected a type ({types}), found {0}",
        types = TokenKind::describe_any(&[TokenKind::Int, TokenKind::Float])
    )]
    ExpectedType(Token),
    #[error("unexpected {0} in expression")]
    UnexpectedInExpression(Token),
    #[error("invalid statement starting with {0}")]
    InvalidStatement(Token),
    #[error("expected a function, procedure or main block, found {0}")]
    ExpectedItem(Token),
    #[error("extra tokens after the main block, starting with {0}")]
    TrailingTokens(Token),
    #[error("{name:?} is already declared in this scope on line {previous_line}")]
    Redeclaration { name: String, previous_line: usize },
    #[error("undeclared variable {0:?}")]
    UndeclaredVariable(String),
    #[error("assignment to undeclared variable {0:?}")]
    UndeclaredAssignment(String),
    #[error("{name:?} is not a function or procedure{}", .found.map(|k| format!(" (it is a {k})")).unwrap_or_default())]
    NotCallable {
        name: String,
        found: Option<SymbolKind>,
    },
}

impl ErrorKind {
    pub fn expected_token(expected: impl AsRef<str>, found: &Token) -> Self {
        Self::ExpectedToken {
            expected: expected.as_ref().to_string(),
            found: found.clone(),
        }
    }

    /// The category this kind of error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::UnknownCharacter(_) => ErrorCategory::Lexical,
            ErrorKind::ExpectedToken { .. }
            | ErrorKind::ExpectedType(_)
            | ErrorKind::UnexpectedInExpression(_)
            | ErrorKind::InvalidStatement(_)
            | ErrorKind::ExpectedItem(_) => ErrorCategory::Syntax,
            ErrorKind::TrailingTokens(_)
            | ErrorKind::Redeclaration { .. }
            | ErrorKind::UndeclaredVariable(_)
            | ErrorKind::UndeclaredAssignment(_)
            | ErrorKind::NotCallable { .. } => ErrorCategory::Semantic,
        }
    }
}

impl From<ScopeError> for ErrorKind {
    fn from(value: ScopeError) -> Self {
        match value {
            ScopeError::Redeclaration {
                name,
                previous_line,
            } => ErrorKind::Redeclaration {
                name,
                previous_line,
            },
        }
    }
}

/// The broad class of a [SyntaxError]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Semantic,
}

pub type SyntaxResult<T = ()> = std::result::Result<T, SyntaxError>;
