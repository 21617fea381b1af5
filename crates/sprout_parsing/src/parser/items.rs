//! Programs, function declarations and blocks

use crate::parser::{ErrorKind, SyntaxResult, TokenParser};
use sprout_ast::block::Block;
use sprout_ast::items::{
    CallableKind, FunctionDecl, Item, Param, ParamList, Program, TypeName, TypeSpec,
};
use sprout_ast::symbol::{DataType, SymbolKind};
use sprout_tokens::spanned::Spanned;
use sprout_tokens::token::TokenKind;

impl<'t> TokenParser<'t> {
    /// `program := (function-decl | procedure-decl)* main-block?`
    ///
    /// Parsing stops after the main block, anything after it is an error.
    pub(crate) fn program(&mut self) -> SyntaxResult<Program> {
        let start = self.peek().span();
        let mut items = vec![];
        loop {
            match self.peek().kind() {
                TokenKind::Eof => break,
                TokenKind::Function | TokenKind::Procedure => {
                    items.push(Item::Function(self.parse(Self::function_decl)?));
                }
                TokenKind::Begin => {
                    items.push(Item::Main(self.parse(Self::block)?));
                    break;
                }
                _ => return Err(self.error(ErrorKind::ExpectedItem(self.peek().clone()))),
            }
        }
        if !self.check(TokenKind::Eof) {
            return Err(self.error(ErrorKind::TrailingTokens(self.peek().clone())));
        }
        Ok(Program {
            items,
            span: self.span_from(start),
        })
    }

    /// `function := 'function' type IDENT param-list block`
    /// `procedure := 'procedure' IDENT param-list block`
    ///
    /// The name is declared in the enclosing scope before the parameters, so a body may call
    /// its own declaration.
    pub(crate) fn function_decl(&mut self) -> SyntaxResult<FunctionDecl> {
        let keyword = self.consume();
        let callable = match keyword.kind() {
            TokenKind::Procedure => CallableKind::Procedure,
            _ => CallableKind::Function,
        };
        let return_ty = match callable {
            CallableKind::Function => Some(self.parse(Self::type_spec)?),
            CallableKind::Procedure => None,
        };
        let name = self.expect(TokenKind::Identifier)?;
        let ty = return_ty
            .as_ref()
            .map(|ty| ty.name.data_type())
            .unwrap_or(DataType::Void);
        self.declare_callable(name, callable.symbol_kind(), ty)?;

        let scope = self.enter_scope();
        let params = self.parse(Self::param_list)?;
        let body = self.parse(Self::block)?;
        self.leave_scope();

        Ok(FunctionDecl {
            callable,
            name: name.lexeme().to_string(),
            return_ty,
            params,
            body,
            scope,
            span: self.span_from(keyword.span()),
        })
    }

    /// `param-list := '(' (type IDENT (',' type IDENT)*)? ')'`
    pub(crate) fn param_list(&mut self) -> SyntaxResult<ParamList> {
        let start = self.expect(TokenKind::LParen)?.span();
        let mut params = vec![];
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.parse(Self::param)?);
                if self.consume_if(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(ParamList {
            params,
            span: self.span_from(start),
        })
    }

    pub(crate) fn param(&mut self) -> SyntaxResult<Param> {
        let ty = self.parse(Self::type_spec)?;
        let name = self.expect(TokenKind::Identifier)?;
        self.declare(name, SymbolKind::Parameter, ty.name.data_type())?;
        let span = ty.span.join(name.span());
        Ok(Param {
            ty,
            name: name.lexeme().to_string(),
            span,
        })
    }

    /// `type := 'int' | 'float'`
    pub(crate) fn type_spec(&mut self) -> SyntaxResult<TypeSpec> {
        let token = self.peek();
        let name = match token.kind() {
            TokenKind::Int => TypeName::Int,
            TokenKind::Float => TypeName::Float,
            _ => return Err(self.error(ErrorKind::ExpectedType(token.clone()))),
        };
        self.consume();
        Ok(TypeSpec {
            name,
            span: token.span(),
        })
    }

    /// `block := 'begin' statement* 'end'`
    pub(crate) fn block(&mut self) -> SyntaxResult<Block> {
        let start = self.expect(TokenKind::Begin)?.span();
        let mut statements = vec![];
        while !self.check(TokenKind::End) {
            if self.check(TokenKind::Eof) {
                return Err(self.error(ErrorKind::expected_token(
                    TokenKind::End.describe(),
                    self.peek(),
                )));
            }
            statements.push(self.parse(Self::statement)?);
        }
        self.consume();
        Ok(Block::new(self.span_from(start), statements))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::tests::test_parser;
    use crate::parser::{ErrorKind, TokenParser};
    use sprout_ast::items::{CallableKind, Item};
    use sprout_ast::node::{AstNode, NodeKind};
    use sprout_ast::symbol::{DataType, SymbolKind};
    use test_log::test;

    #[test]
    fn parse_function_decl() {
        test_parser(
            "function float avg(int a, float b) begin return a; end",
            |parser, _| {
                let function = parser
                    .parse(TokenParser::function_decl)
                    .unwrap_or_else(|e| panic!("{e}"));
                assert_eq!(function.kind(), NodeKind::FunctionDecl);
                assert_eq!(function.callable, CallableKind::Function);
                assert_eq!(function.return_data_type(), DataType::Float);
                assert_eq!(function.params.params.len(), 2);
                assert_eq!(function.params.params[1].name, "b");
                assert_eq!(function.body.statements.len(), 1);
            },
        );
    }

    #[test]
    fn parse_procedure_decl() {
        test_parser("procedure show(int a) begin print(a); end", |parser, _| {
            let procedure = parser
                .parse(TokenParser::function_decl)
                .unwrap_or_else(|e| panic!("{e}"));
            assert_eq!(procedure.kind(), NodeKind::ProcedureDecl);
            assert!(procedure.return_ty.is_none());
            assert_eq!(procedure.return_data_type(), DataType::Void);
            let symbol = parser.resolve("show").expect("procedure should be declared");
            assert_eq!(symbol.kind, SymbolKind::Procedure);
            assert_eq!(symbol.ty, DataType::Void);
            assert_eq!(symbol.address, 0);
        });
    }

    #[test]
    fn parse_param_list() {
        test_parser("()", |parser, _| {
            let params = parser.parse(TokenParser::param_list).unwrap();
            assert!(params.params.is_empty());
        });
        test_parser("(int a, int b)", |parser, _| {
            let params = parser.parse(TokenParser::param_list).unwrap();
            assert_eq!(params.params.len(), 2);
            assert_eq!(parser.resolve("b").map(|s| s.address), Some(1));
        });
        test_parser("(int a,)", |parser, _| {
            let err = parser.parse(TokenParser::param_list).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::ExpectedType(found) if found.lexeme() == ")"));
        });
    }

    #[test]
    fn parse_main_block_only() {
        test_parser("begin end", |parser, _| {
            let program = parser.parse(TokenParser::program).unwrap();
            assert_eq!(program.items.len(), 1);
            assert!(matches!(program.items[0], Item::Main(_)));
            assert!(program.main().is_some());
        });
    }

    #[test]
    fn program_rejects_other_items() {
        test_parser("int x;", |parser, _| {
            let err = parser.parse(TokenParser::program).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::ExpectedItem(found) if found.lexeme() == "int"));
        });
    }

    #[test]
    fn block_needs_end() {
        test_parser("begin int x;", |parser, _| {
            let err = parser.parse(TokenParser::block).unwrap_err();
            assert!(matches!(
                err.kind(),
                ErrorKind::ExpectedToken { expected, .. } if expected == "'end'"
            ));
        });
    }

    #[test]
    fn type_spec_needs_type() {
        test_parser("x", |parser, _| {
            let err = parser.parse(TokenParser::type_spec).unwrap_err();
            assert_eq!(err.to_string(), "syntax error on line 1: expected a type ('int' or 'float'), found 'x' (IDENTIFIER)");
        });
    }
}
