//! Renders a [SyntaxError] against the source it came from

use crate::parser::SyntaxError;
use itertools::Itertools;
use sprout_tokens::spanned::{LineReader, Spanned};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// A printable report of a syntax error, with the surrounding source lines and the offending
/// token underlined.
///
/// ```text
/// syntax error on line 2: expected ';', found 'end' (END)
///   -> main.lang:2:10
/// 1 | begin
/// 2 |   int x = 1
///               ~~~
/// 3 | end
/// ```
#[derive(Debug)]
pub struct Report<'a> {
    error: &'a SyntaxError,
    path: &'a Path,
    source: &'a str,
    show_non_terminals: bool,
}

impl<'a> Report<'a> {
    pub fn new(error: &'a SyntaxError, path: &'a Path, source: &'a str) -> Self {
        Self {
            error,
            path,
            source,
            show_non_terminals: false,
        }
    }

    /// Also list the productions that were being parsed
    pub fn with_non_terminals(mut self, show: bool) -> Self {
        self.show_non_terminals = show;
        self
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let location = self.error.span();
        writeln!(f, "{}", self.error)?;
        writeln!(
            f,
            "  -> {}:{}:{}",
            self.path.display(),
            location.line(),
            location.col()
        )?;
        let lines = LineReader::new(2, 2).lines(self.source, &location);
        let width = lines
            .iter()
            .map(|line| line.line.to_string().len())
            .max()
            .unwrap_or(1);
        for line in &lines {
            writeln!(f, "{:>width$} | {}", line.line, line.src.trim_end())?;
            if line.line == location.line() {
                let underline = if location.is_empty() {
                    "^".to_string()
                } else {
                    let len = self
                        .source
                        .get(location.offset()..location.offset() + location.len())
                        .map(|text| text.chars().count())
                        .unwrap_or(location.len());
                    "~".repeat(len)
                };
                writeln!(
                    f,
                    "{:width$}   {:col$}{underline}",
                    "",
                    "",
                    col = location.col()
                )?;
            }
        }
        if self.show_non_terminals && !self.error.non_terminal_stack().is_empty() {
            writeln!(
                f,
                "while parsing: {}",
                self.error.non_terminal_stack().iter().join(" > ")
            )?;
        }
        Ok(())
    }
}
