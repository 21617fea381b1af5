//! Errors produced while checking a sprout program

use sprout_parsing::SyntaxError;
use sprout_tokens::spanned::Span;
use sprout_tokens::SpannedError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for a program the front end rejected
pub const EXIT_REJECTED: i32 = 65;
/// Exit status for input that could not be read
pub const EXIT_IO: i32 = 74;

/// The kind of error
#[derive(Debug, Error)]
pub enum FrontendErrorKind {
    #[error("could not read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// An error occurred while checking a sprout program
#[derive(Debug, Error)]
#[error(transparent)]
pub struct FrontendError(#[from] SpannedError<FrontendErrorKind>);

impl FrontendError {
    /// Creates a new [FrontendError] using a quick constructor
    #[inline]
    pub fn new(
        error: impl Into<FrontendErrorKind>,
        location: impl Into<Option<Span>>,
    ) -> Self {
        Self(SpannedError::new(error.into(), location.into()))
    }

    pub fn kind(&self) -> &FrontendErrorKind {
        self.0.error()
    }

    pub fn location(&self) -> Option<Span> {
        self.0.location()
    }

    /// The rejection reason, if the program could be read at all
    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        match self.kind() {
            FrontendErrorKind::Syntax(error) => Some(error),
            FrontendErrorKind::Io { .. } => None,
        }
    }

    /// The process exit status this error maps to
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            FrontendErrorKind::Io { .. } => EXIT_IO,
            FrontendErrorKind::Syntax(_) => EXIT_REJECTED,
        }
    }
}

impl From<FrontendErrorKind> for FrontendError {
    fn from(value: FrontendErrorKind) -> Self {
        Self::new(value, None)
    }
}

/// A type alias for general results in sproutc
pub type FrontendResult<T> = Result<T, FrontendError>;
