use crate::parser::{ErrorKind, SyntaxResult, TokenParser};
use sprout_ast::statements::{
    Assignment, Conditional, Declaration, Loop, Print, Return, Scan, Stmt,
};
use sprout_ast::symbol::SymbolKind;
use sprout_tokens::spanned::Spanned;
use sprout_tokens::token::TokenKind;

impl<'t> TokenParser<'t> {
    /// Picks a statement from its first token, and the one after it for identifiers
    pub(crate) fn statement(&mut self) -> SyntaxResult<Stmt> {
        let token = self.peek();
        match token.kind() {
            TokenKind::If => self.parse(Self::conditional).map(Stmt::Conditional),
            TokenKind::While => self.parse(Self::while_loop).map(Stmt::Loop),
            TokenKind::Return => self.parse(Self::return_stmt).map(Stmt::Return),
            TokenKind::Print => self.parse(Self::print).map(Stmt::Print),
            TokenKind::Scan => self.parse(Self::scan).map(Stmt::Scan),
            TokenKind::Int | TokenKind::Float => {
                let decl = self.parse(Self::declaration)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Declaration(decl))
            }
            TokenKind::Identifier if self.peek_next().kind() == TokenKind::LParen => {
                let call = self.parse(Self::call)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Call(call))
            }
            TokenKind::Identifier => self.parse(Self::assignment).map(Stmt::Assignment),
            _ => Err(self.error(ErrorKind::InvalidStatement(token.clone()))),
        }
    }

    /// `var-decl := type IDENT ('=' expression)?`
    ///
    /// The name is declared before the initializer is parsed.
    pub(crate) fn declaration(&mut self) -> SyntaxResult<Declaration> {
        let ty = self.parse(Self::type_spec)?;
        let name = self.expect(TokenKind::Identifier)?;
        self.declare(name, SymbolKind::Variable, ty.name.data_type())?;
        let init = match self.consume_if(TokenKind::Assign) {
            Some(_) => Some(self.parse(Self::expression)?),
            None => None,
        };
        Ok(Declaration {
            ty: ty.name,
            name: name.lexeme().to_string(),
            init,
            span: self.span_from(ty.span),
        })
    }

    /// `assignment := IDENT '=' expression ';'`
    pub(crate) fn assignment(&mut self) -> SyntaxResult<Assignment> {
        let target = self.expect(TokenKind::Identifier)?;
        if self.resolve(target.lexeme()).is_none() {
            return Err(self.error_at(
                ErrorKind::UndeclaredAssignment(target.lexeme().to_string()),
                target.span(),
            ));
        }
        self.expect(TokenKind::Assign)?;
        let value = self.parse(Self::expression)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Assignment {
            target: target.lexeme().to_string(),
            value,
            span: self.span_from(target.span()),
        })
    }

    /// `loop := 'while' expression 'do' block 'endwhile'`
    pub(crate) fn while_loop(&mut self) -> SyntaxResult<Loop> {
        let start = self.expect(TokenKind::While)?.span();
        let condition = self.parse(Self::expression)?;
        self.expect(TokenKind::Do)?;
        let body = self.parse(Self::block)?;
        self.expect(TokenKind::Endwhile)?;
        Ok(Loop {
            condition,
            body,
            span: self.span_from(start),
        })
    }

    /// `conditional := 'if' expression 'then' block ('else' block 'endelse')? 'endif'`
    pub(crate) fn conditional(&mut self) -> SyntaxResult<Conditional> {
        let start = self.expect(TokenKind::If)?.span();
        let condition = self.parse(Self::expression)?;
        self.expect(TokenKind::Then)?;
        let then_block = self.parse(Self::block)?;
        let else_block = match self.consume_if(TokenKind::Else) {
            Some(_) => {
                let block = self.parse(Self::block)?;
                self.expect(TokenKind::Endelse)?;
                Some(block)
            }
            None => None,
        };
        self.expect(TokenKind::Endif)?;
        Ok(Conditional {
            condition,
            then_block,
            else_block,
            span: self.span_from(start),
        })
    }

    pub(crate) fn return_stmt(&mut self) -> SyntaxResult<Return> {
        let start = self.expect(TokenKind::Return)?.span();
        let value = self.parse(Self::expression)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Return {
            value,
            span: self.span_from(start),
        })
    }

    pub(crate) fn print(&mut self) -> SyntaxResult<Print> {
        let start = self.expect(TokenKind::Print)?.span();
        let args = self.parse(Self::arg_list)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Print {
            args,
            span: self.span_from(start),
        })
    }

    pub(crate) fn scan(&mut self) -> SyntaxResult<Scan> {
        let start = self.expect(TokenKind::Scan)?.span();
        let args = self.parse(Self::arg_list)?;
        self.expect(TokenKind::Semicolon)?;
        Ok(Scan {
            args,
            span: self.span_from(start),
        })
    }
}
