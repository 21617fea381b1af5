//! A trait that can provide the [Span] of a token or syntax tree node

/// A trait that can provide the [Span] of a token or syntax tree node
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A region of source text, along with the line and column it starts on.
///
/// Lines are 1-based and columns are 0-based character counts.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Span {
    offset: usize,
    len: usize,
    line: usize,
    col: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize, line: usize, col: usize) -> Self {
        Self {
            offset,
            len,
            line,
            col,
        }
    }

    /// Gets a zero-length span directly after this span.
    ///
    /// Assumes the span does not cross a line break, which holds for every token.
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
            line: self.line,
            col: self.col + self.len,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let first = if self.offset <= other.offset {
            *self
        } else {
            other
        };
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
            line: first.line,
            col: first.col,
        }
    }

    /// The byte offset this span starts at
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The length of this span in bytes
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The 1-based line this span starts on
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The 0-based column this span starts at
    pub const fn col(&self) -> usize {
        self.col
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// A line reader struct that's responsible for getting lines around a span
#[derive(Debug, Default)]
pub struct LineReader {
    before: usize,
    after: usize,
}

impl LineReader {
    /// Creates a new line reader that gets `before` number of lines before a span and `after` number
    /// of lines after.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Gets the lines of `source` surrounding a given span.
    ///
    /// Lines past the end of the source are simply missing from the result.
    pub fn lines<'s>(&self, source: &'s str, span: &Span) -> Vec<Line<'s>> {
        let range = span.line().saturating_sub(self.before)..=span.line().saturating_add(self.after);
        source
            .lines()
            .enumerate()
            .map(|(idx, src)| Line { line: idx + 1, src })
            .filter(|line| range.contains(&line.line))
            .collect()
    }
}

/// A single line of source text
#[derive(Debug, PartialEq)]
pub struct Line<'s> {
    pub line: usize,
    pub src: &'s str,
}
