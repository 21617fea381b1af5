//! Expressions

use crate::node::{AstNode, NodeKind};
use sprout_tokens::spanned::{Span, Spanned};

/// An expression
#[derive(Debug)]
pub enum Expr {
    Binary(BinaryExpr),
    Negate(NegateExpr),
    Identifier(Identifier),
    Literal(Literal),
    Call(Call),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Binary(e) => e.span(),
            Expr::Negate(e) => e.span(),
            Expr::Identifier(e) => e.span(),
            Expr::Literal(e) => e.span(),
            Expr::Call(e) => e.span(),
        }
    }
}

impl AstNode for Expr {
    fn kind(&self) -> NodeKind {
        match self {
            Expr::Binary(e) => e.kind(),
            Expr::Negate(e) => e.kind(),
            Expr::Identifier(e) => e.kind(),
            Expr::Literal(e) => e.kind(),
            Expr::Call(e) => e.kind(),
        }
    }

    fn value(&self) -> Option<&str> {
        match self {
            Expr::Binary(e) => e.value(),
            Expr::Negate(e) => e.value(),
            Expr::Identifier(e) => e.value(),
            Expr::Literal(e) => e.value(),
            Expr::Call(e) => e.value(),
        }
    }
}

/// A binary operator
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Neq,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Lte,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    Gte,
}

impl BinaryOp {
    pub fn node_kind(&self) -> NodeKind {
        match self {
            BinaryOp::Add => NodeKind::Add,
            BinaryOp::Sub => NodeKind::Sub,
            BinaryOp::Mul => NodeKind::Mul,
            BinaryOp::Div => NodeKind::Div,
            BinaryOp::Eq => NodeKind::Eq,
            BinaryOp::Neq => NodeKind::Neq,
            BinaryOp::Lt => NodeKind::Lt,
            BinaryOp::Lte => NodeKind::Lte,
            BinaryOp::Gt => NodeKind::Gt,
            BinaryOp::Gte => NodeKind::Gte,
        }
    }

    /// Operators at the multiplicative level
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, BinaryOp::Mul | BinaryOp::Div)
    }
}

/// `lhs op rhs`
#[derive(Debug)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

impl BinaryExpr {
    /// Creates a binary expression spanning both operands
    pub fn new(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        let span = lhs.span().join(rhs.span());
        Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        }
    }
}

impl AstNode for BinaryExpr {
    fn kind(&self) -> NodeKind {
        self.op.node_kind()
    }
}

/// `-operand`
#[derive(Debug)]
pub struct NegateExpr {
    pub operand: Box<Expr>,
    pub span: Span,
}

impl AstNode for NegateExpr {
    fn kind(&self) -> NodeKind {
        NodeKind::Negate
    }
}

/// A reference to a declared name
#[derive(Debug)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl AstNode for Identifier {
    fn kind(&self) -> NodeKind {
        NodeKind::Identifier
    }

    fn value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// The kind of a literal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Float,
}

/// A numeric literal, kept as written
#[derive(Debug)]
pub struct Literal {
    pub kind: LiteralKind,
    pub text: String,
    pub span: Span,
}

impl AstNode for Literal {
    fn kind(&self) -> NodeKind {
        match self.kind {
            LiteralKind::Int => NodeKind::IntLiteral,
            LiteralKind::Float => NodeKind::FloatLiteral,
        }
    }

    fn value(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// A call of a function or procedure
#[derive(Debug)]
pub struct Call {
    pub name: String,
    pub args: ArgList,
    pub span: Span,
}

impl AstNode for Call {
    fn kind(&self) -> NodeKind {
        NodeKind::Call
    }

    fn value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A parenthesized, comma separated list of arguments
#[derive(Debug)]
pub struct ArgList {
    pub args: Vec<Expr>,
    pub span: Span,
}

impl AstNode for ArgList {
    fn kind(&self) -> NodeKind {
        NodeKind::ArgList
    }
}

crate::impl_spanned!(BinaryExpr, NegateExpr, Identifier, Literal, Call, ArgList);
