//! Tokens, spans and located errors shared by every stage of the sprout front end.

use std::fmt::{Display, Formatter};
use crate::spanned::Span;

pub mod spanned;
pub mod token;

/// An error with a location
#[derive(Debug, thiserror::Error)]
pub struct SpannedError<E> {
    error: E,
    location: Option<Span>,
}

impl<E> SpannedError<E> {
    pub fn new(error: E, location: impl Into<Option<Span>>) -> Self {
        Self {
            error,
            location: location.into(),
        }
    }

    /// Gets the wrapped error
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Gets the location of the error, if known
    pub fn location(&self) -> Option<Span> {
        self.location
    }
}

impl<E: Display> Display for SpannedError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(location) = &self.location {
            write!(f, "\n  -> line {}:{}", location.line(), location.col())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let error = SpannedError::new("bad thing", Span::new(10, 3, 2, 4));
        assert_eq!(error.to_string(), "bad thing\n  -> line 2:4");
        assert_eq!(error.location().map(|l| l.line()), Some(2));
    }

    #[test]
    fn test_display_without_location() {
        let error = SpannedError::new("bad thing", None);
        assert_eq!(error.to_string(), "bad thing");
        assert_eq!(error.error(), &"bad thing");
    }
}
