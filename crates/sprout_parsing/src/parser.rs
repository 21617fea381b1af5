//! A single pass, recursive descent parser that resolves names while building the syntax tree.
//!
//! Every production has its own method on [TokenParser]. Names are declared into and looked up
//! from the scope arena of the parser as soon as they are seen, so a name is only usable after
//! its declaration.

use sprout_ast::scope::{ScopeArena, ScopeId};
use sprout_ast::symbol::{DataType, Symbol, SymbolKind};
use sprout_ast::translation_unit::TranslationUnit;
use sprout_tokens::spanned::{Span, Spanned};
use sprout_tokens::token::{Token, TokenKind, TokenStream};
use std::any::type_name;
use tracing::{debug, trace};

pub use error::*;

mod error;
mod expr;
mod items;
mod statements;

/// A production that can be run by a [TokenParser]
pub trait Parser<'t, O> {
    /// The name of the production, used for the non terminal stack of errors
    fn non_terminal(&self) -> &'static str;
    fn parse(&mut self, parser: &mut TokenParser<'t>) -> SyntaxResult<O>;
}

impl<'t, O, F> Parser<'t, O> for F
where
    F: FnMut(&mut TokenParser<'t>) -> SyntaxResult<O>,
{
    fn non_terminal(&self) -> &'static str {
        let name = type_name::<O>();
        name.rsplit("::").next().unwrap_or(name)
    }

    fn parse(&mut self, parser: &mut TokenParser<'t>) -> SyntaxResult<O> {
        (self)(parser)
    }
}

/// The scope names are currently declared into, with the address the next variable gets
#[derive(Debug, Copy, Clone)]
struct ScopeFrame {
    scope: ScopeId,
    next_address: u32,
}

/// Parses and resolves a token stream.
///
/// A parser owns the scope arena it fills, so independent parses share nothing.
///
/// # Examples
/// ```
/// # use sprout_parsing::lexer::tokenize;
/// # use sprout_parsing::parser::TokenParser;
/// let tokens = tokenize("begin int x = 5; print(x); end");
/// let unit = TokenParser::new(&tokens).parse_program().unwrap();
/// assert_eq!(unit.global_symbol("x").map(|s| s.address), Some(0));
/// ```
#[derive(Debug)]
pub struct TokenParser<'t> {
    tokens: &'t [Token],
    cursor: usize,
    last_span: Option<Span>,
    scopes: ScopeArena,
    global: ScopeId,
    current: ScopeFrame,
    frames: Vec<ScopeFrame>,
    non_terminals: Vec<&'static str>,
}

impl<'t> TokenParser<'t> {
    /// Creates a new parser over a token stream, with a fresh global scope
    pub fn new(tokens: &'t TokenStream) -> Self {
        let mut scopes = ScopeArena::new();
        let global = scopes.create();
        Self {
            tokens: tokens.tokens(),
            cursor: 0,
            last_span: None,
            scopes,
            global,
            current: ScopeFrame {
                scope: global,
                next_address: 0,
            },
            frames: vec![],
            non_terminals: vec![],
        }
    }

    /// Parses an entire program, giving up at the first error
    pub fn parse_program(mut self) -> SyntaxResult<TranslationUnit> {
        let program = self.parse(Self::program)?;
        debug!(
            "parsed program with {} items and {} scopes",
            program.items.len(),
            self.scopes.len()
        );
        Ok(TranslationUnit::new(program, self.scopes, self.global))
    }

    /// Runs a production, tracking it on the non terminal stack
    #[inline]
    pub fn parse<O, P: Parser<'t, O>>(&mut self, mut parser: P) -> SyntaxResult<O> {
        let non_terminal = parser.non_terminal();
        trace!("starting {non_terminal} at {:?}", self.peek());
        self.non_terminals.push(non_terminal);
        let result = parser.parse(self);
        if result.is_ok() {
            self.non_terminals.pop();
        }
        result
    }

    /// The current token. Never moves past the end of input.
    pub(crate) fn peek(&self) -> &'t Token {
        self.token_at(self.cursor)
    }

    /// The token after the current one
    pub(crate) fn peek_next(&self) -> &'t Token {
        self.token_at(self.cursor + 1)
    }

    fn token_at(&self, index: usize) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        &tokens[index.min(tokens.len() - 1)]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind() == kind
    }

    pub(crate) fn consume(&mut self) -> &'t Token {
        let token = self.peek();
        if self.cursor < self.tokens.len() - 1 {
            self.cursor += 1;
        }
        trace!("consumed {token:?}");
        self.last_span = Some(token.span());
        token
    }

    /// Consumes the current token if it is of the given kind
    pub(crate) fn consume_if(&mut self, kind: TokenKind) -> Option<&'t Token> {
        if self.check(kind) {
            Some(self.consume())
        } else {
            None
        }
    }

    /// Consumes the current token, which must be of the given kind
    pub(crate) fn expect(&mut self, kind: TokenKind) -> SyntaxResult<&'t Token> {
        match self.consume_if(kind) {
            Some(token) => Ok(token),
            None => Err(self.error(ErrorKind::expected_token(kind.describe(), self.peek()))),
        }
    }

    /// The span from `start` through the last consumed token
    pub(crate) fn span_from(&self, start: Span) -> Span {
        match self.last_span {
            Some(last) if last.offset() >= start.offset() => start.join(last),
            _ => start,
        }
    }

    /// Creates an error at the current token.
    ///
    /// Reaching a token the lexer did not recognize is always reported as that token being unknown.
    pub(crate) fn error(&self, kind: ErrorKind) -> SyntaxError {
        let token = self.peek();
        let kind = match token.kind() {
            TokenKind::Unknown => ErrorKind::UnknownCharacter(token.lexeme().to_string()),
            _ => kind,
        };
        self.error_at(kind, token.span())
    }

    pub(crate) fn error_at(&self, kind: ErrorKind, span: Span) -> SyntaxError {
        SyntaxError::new(kind, span, self.non_terminals.clone())
    }

    /// Declares a variable or parameter into the current scope, at its next address
    pub(crate) fn declare(
        &mut self,
        name: &Token,
        kind: SymbolKind,
        ty: DataType,
    ) -> SyntaxResult<u32> {
        let address = self.current.next_address;
        self.insert(name, kind, ty, address)?;
        self.current.next_address += 1;
        Ok(address)
    }

    /// Declares a function or procedure into the current scope. Callables always have address
    /// 0 and do not use up an address.
    pub(crate) fn declare_callable(
        &mut self,
        name: &Token,
        kind: SymbolKind,
        ty: DataType,
    ) -> SyntaxResult<()> {
        self.insert(name, kind, ty, 0)
    }

    fn insert(
        &mut self,
        name: &Token,
        kind: SymbolKind,
        ty: DataType,
        address: u32,
    ) -> SyntaxResult<()> {
        let symbol = Symbol::new(name.lexeme(), kind, ty, name.line(), address);
        self.scopes
            .insert(self.current.scope, symbol)
            .map_err(|e| self.error_at(e.into(), name.span()))?;
        debug!(
            "declared {kind} {:?} in {} at address {address}",
            name.lexeme(),
            self.current.scope
        );
        Ok(())
    }

    /// Enters a new scope nested in the current one. Addresses within it start at 1.
    pub(crate) fn enter_scope(&mut self) -> ScopeId {
        let scope = self.scopes.enter(self.current.scope);
        let outer = std::mem::replace(
            &mut self.current,
            ScopeFrame {
                scope,
                next_address: 1,
            },
        );
        self.frames.push(outer);
        debug!("entered {scope}");
        scope
    }

    /// Returns to the scope that was current before the last [enter_scope](Self::enter_scope)
    pub(crate) fn leave_scope(&mut self) {
        if let Some(outer) = self.frames.pop() {
            debug!("left {}", self.current.scope);
            self.current = outer;
        }
    }

    /// Looks up a name from the current scope outwards
    pub(crate) fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.scopes.lookup(self.current.scope, name)
    }
}

/// Parses a token stream into a checked translation unit
pub fn parse(tokens: &TokenStream) -> SyntaxResult<TranslationUnit> {
    TokenParser::new(tokens).parse_program()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::lexer::tokenize;

    /// Runs `callback` with a parser over `src`
    pub(crate) fn test_parser<F>(src: &str, callback: F)
    where
        F: FnOnce(&mut TokenParser<'_>, &TokenStream),
    {
        let tokens = tokenize(src);
        let mut parser = TokenParser::new(&tokens);
        callback(&mut parser, &tokens);
    }

    #[test]
    fn test_peek_never_passes_eof() {
        let tokens = tokenize("x");
        let mut parser = TokenParser::new(&tokens);
        assert_eq!(parser.peek_next().kind(), TokenKind::Eof);
        parser.consume();
        assert_eq!(parser.consume().kind(), TokenKind::Eof);
        assert_eq!(parser.peek().kind(), TokenKind::Eof);
        assert_eq!(parser.peek_next().kind(), TokenKind::Eof);
    }

    #[test]
    fn test_expect_reports_found_token() {
        let tokens = tokenize("end");
        let mut parser = TokenParser::new(&tokens);
        let err = parser.expect(TokenKind::Begin).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::expected_token("'begin'", &tokens.tokens()[0])
        );
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_error_on_unknown_token() {
        let tokens = tokenize("@");
        let mut parser = TokenParser::new(&tokens);
        let err = parser.expect(TokenKind::Begin).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnknownCharacter("@".to_string()));
        assert_eq!(err.category(), ErrorCategory::Lexical);
    }

    #[test]
    fn test_frames_restore_addresses() {
        let tokens = tokenize("a b c d");
        let mut parser = TokenParser::new(&tokens);
        let [a, b, c, d] = [0, 1, 2, 3].map(|i| &tokens.tokens()[i]);
        assert_eq!(
            parser.declare(a, SymbolKind::Variable, DataType::Integer).unwrap(),
            0
        );
        parser.enter_scope();
        assert_eq!(
            parser.declare(b, SymbolKind::Parameter, DataType::Integer).unwrap(),
            1
        );
        assert_eq!(
            parser.declare(c, SymbolKind::Variable, DataType::Float).unwrap(),
            2
        );
        assert!(parser.resolve("a").is_some());
        parser.leave_scope();
        assert!(parser.resolve("b").is_none());
        assert_eq!(
            parser.declare(d, SymbolKind::Variable, DataType::Integer).unwrap(),
            1
        );
    }
}
