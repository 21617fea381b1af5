//! Lexing, parsing and name resolution for sprout.
//!
//! Source text is turned into a [TokenStream] by the [lexer], then into a checked
//! [TranslationUnit] by the [parser] in a single forward pass.

use sprout_ast::translation_unit::TranslationUnit;
use sprout_tokens::token::TokenStream;

pub mod lexer;
pub mod parser;
pub mod report;

pub use parser::{parse, ErrorCategory, ErrorKind, SyntaxError, SyntaxResult};

/// Tokenizes and parses source text
pub fn parse_source(source: &str) -> SyntaxResult<TranslationUnit> {
    let tokens: TokenStream = lexer::tokenize(source);
    parse(&tokens)
}
