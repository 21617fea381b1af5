//! Expressions.
//!
//! Every binary operator other than `*` and `/` shares one precedence level, so `a < b + c`
//! groups as `(a < b) + c`. A leading minus negates a single factor and ends the term.

use crate::parser::{ErrorKind, SyntaxResult, TokenParser};
use sprout_ast::expr::{
    ArgList, BinaryExpr, BinaryOp, Call, Expr, Identifier, Literal, LiteralKind, NegateExpr,
};
use sprout_tokens::spanned::Spanned;
use sprout_tokens::token::TokenKind;

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Asterisk => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::Neq => BinaryOp::Neq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Lte => BinaryOp::Lte,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::Gte => BinaryOp::Gte,
        _ => return None,
    };
    Some(op)
}

impl<'t> TokenParser<'t> {
    /// `expression := term (op term)*`, left associative
    pub(crate) fn expression(&mut self) -> SyntaxResult<Expr> {
        let mut lhs = self.term()?;
        while let Some(op) = self.consume_op(false) {
            let rhs = self.term()?;
            lhs = Expr::Binary(BinaryExpr::new(op, lhs, rhs));
        }
        Ok(lhs)
    }

    /// `term := '-' factor | factor (('*'|'/') factor)*`
    fn term(&mut self) -> SyntaxResult<Expr> {
        if let Some(minus) = self.consume_if(TokenKind::Minus) {
            let operand = self.factor()?;
            let span = minus.span().join(operand.span());
            return Ok(Expr::Negate(NegateExpr {
                operand: Box::new(operand),
                span,
            }));
        }
        let mut lhs = self.factor()?;
        while let Some(op) = self.consume_op(true) {
            let rhs = self.factor()?;
            lhs = Expr::Binary(BinaryExpr::new(op, lhs, rhs));
        }
        Ok(lhs)
    }

    /// Consumes a binary operator of the additive and comparison level, or of the
    /// multiplicative level
    fn consume_op(&mut self, multiplicative: bool) -> Option<BinaryOp> {
        let op = binary_op(self.peek().kind())?;
        if op.is_multiplicative() != multiplicative {
            return None;
        }
        self.consume();
        Some(op)
    }

    /// `factor := IDENT arg-list | IDENT | INT_LIT | FLOAT_LIT | '(' expression ')'`
    fn factor(&mut self) -> SyntaxResult<Expr> {
        let token = self.peek();
        match token.kind() {
            TokenKind::Identifier if self.peek_next().kind() == TokenKind::LParen => {
                self.parse(Self::call).map(Expr::Call)
            }
            TokenKind::Identifier => {
                self.consume();
                if self.resolve(token.lexeme()).is_none() {
                    return Err(self.error_at(
                        ErrorKind::UndeclaredVariable(token.lexeme().to_string()),
                        token.span(),
                    ));
                }
                Ok(Expr::Identifier(Identifier {
                    name: token.lexeme().to_string(),
                    span: token.span(),
                }))
            }
            TokenKind::IntegerLiteral | TokenKind::FloatLiteral => {
                self.consume();
                let kind = match token.kind() {
                    TokenKind::FloatLiteral => LiteralKind::Float,
                    _ => LiteralKind::Int,
                };
                Ok(Expr::Literal(Literal {
                    kind,
                    text: token.lexeme().to_string(),
                    span: token.span(),
                }))
            }
            TokenKind::LParen => {
                self.consume();
                let inner = self.parse(Self::expression)?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.error(ErrorKind::UnexpectedInExpression(token.clone()))),
        }
    }

    /// `call := IDENT arg-list`, where the name must resolve to a function or procedure
    pub(crate) fn call(&mut self) -> SyntaxResult<Call> {
        let name = self.expect(TokenKind::Identifier)?;
        match self.resolve(name.lexeme()).map(|symbol| symbol.kind) {
            Some(kind) if kind.is_callable() => {}
            found => {
                return Err(self.error_at(
                    ErrorKind::NotCallable {
                        name: name.lexeme().to_string(),
                        found,
                    },
                    name.span(),
                ))
            }
        }
        let args = self.parse(Self::arg_list)?;
        Ok(Call {
            name: name.lexeme().to_string(),
            args,
            span: self.span_from(name.span()),
        })
    }

    /// `arg-list := '(' (expression (',' expression)*)? ')'`
    pub(crate) fn arg_list(&mut self) -> SyntaxResult<ArgList> {
        let start = self.expect(TokenKind::LParen)?.span();
        let mut args = vec![];
        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.parse(Self::expression)?);
                if self.consume_if(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(ArgList {
            args,
            span: self.span_from(start),
        })
    }
}
