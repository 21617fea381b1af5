//! Responsible for running source files through the lexer and the parser

use sprout_ast::scope::{ArenaDump, ScopeDump};
use sprout_ast::translation_unit::TranslationUnit;
use sprout_parsing::lexer::Lexer;
use sprout_tokens::spanned::Spanned;
use sprout_tokens::token::TokenStream;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

pub mod error;

pub use error::{FrontendError, FrontendErrorKind, FrontendResult, EXIT_IO, EXIT_REJECTED};

/// Checks sprout programs.
///
/// Must be configured using a [FrontendBuilder].
#[derive(Debug, Clone)]
pub struct Frontend {
    function_scopes: bool,
}

impl Frontend {
    /// Creates the default FrontendBuilder
    #[inline]
    pub fn builder() -> FrontendBuilder {
        FrontendBuilder::new()
    }

    /// Whether symbol dumps of checked programs include every function scope
    pub fn function_scopes(&self) -> bool {
        self.function_scopes
    }

    /// Reads and checks the file at a given path
    pub fn check_file(&self, path: impl AsRef<Path>) -> FrontendResult<Checked> {
        let path = path.as_ref();
        let lexer = Lexer::read_path(path).map_err(|source| read_error(path, source))?;
        let source = lexer.source().to_string();
        let tokens = lexer.into_stream();
        self.check_tokens(path, source, tokens)
    }

    /// Reads the source text of a file without checking it
    pub fn read_source(&self, path: impl AsRef<Path>) -> FrontendResult<String> {
        let path = path.as_ref();
        std::fs::read_to_string(path).map_err(|source| read_error(path, source))
    }

    /// Checks source text that was read from `path`
    pub fn check_source(&self, path: impl AsRef<Path>, source: &str) -> FrontendResult<Checked> {
        let tokens = Lexer::new(source).into_stream();
        self.check_tokens(path.as_ref(), source.to_string(), tokens)
    }

    fn check_tokens(
        &self,
        path: &Path,
        source: String,
        tokens: TokenStream,
    ) -> FrontendResult<Checked> {
        let _span = info_span!("check", path = ?path).entered();
        debug!("lexed {} tokens", tokens.len());
        let unit = sprout_parsing::parse(&tokens).map_err(|error| {
            let location = error.span();
            FrontendError::new(error, location)
        })?;
        info!("{path:?} accepted");
        Ok(Checked {
            path: path.to_path_buf(),
            source,
            tokens,
            unit,
            function_scopes: self.function_scopes,
        })
    }
}

fn read_error(path: &Path, source: io::Error) -> FrontendError {
    FrontendError::from(FrontendErrorKind::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Builder for creating a [Frontend] instance.
#[derive(Debug, Default)]
pub struct FrontendBuilder {
    /// Dump every function scope alongside the global scope
    pub function_scopes: bool,
}

impl FrontendBuilder {
    /// Creates a FrontendBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether symbol dumps include function scopes
    pub fn function_scopes(mut self, function_scopes: bool) -> Self {
        self.function_scopes = function_scopes;
        self
    }

    /// Builds a [Frontend] instance from this builder
    pub fn build(self) -> Frontend {
        Frontend {
            function_scopes: self.function_scopes,
        }
    }
}

/// A program that made it through the front end
#[derive(Debug)]
pub struct Checked {
    pub path: PathBuf,
    pub source: String,
    pub tokens: TokenStream,
    pub unit: TranslationUnit,
    function_scopes: bool,
}

impl Checked {
    /// The symbol table listing, covering function scopes only when the [Frontend] asked for it
    pub fn symbol_dump(&self) -> SymbolDump<'_> {
        if self.function_scopes {
            SymbolDump::All(self.unit.full_symbol_dump())
        } else {
            SymbolDump::Global(self.unit.symbol_dump())
        }
    }
}

/// A displayable symbol table listing
#[derive(Debug)]
pub enum SymbolDump<'a> {
    Global(ScopeDump<'a>),
    All(ArenaDump<'a>),
}

impl Display for SymbolDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolDump::Global(dump) => write!(f, "{dump}"),
            SymbolDump::All(dump) => write!(f, "{dump}"),
        }
    }
}
