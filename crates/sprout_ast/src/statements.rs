//! Statements

use crate::block::Block;
use crate::expr::{ArgList, Call, Expr};
use crate::items::TypeName;
use crate::node::{AstNode, NodeKind};
use sprout_tokens::spanned::{Span, Spanned};

/// A statement
#[derive(Debug)]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(Assignment),
    Loop(Loop),
    Conditional(Conditional),
    Print(Print),
    Scan(Scan),
    Return(Return),
    /// A call made for its effect, ie `p(1);`
    Call(Call),
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Declaration(s) => s.span(),
            Stmt::Assignment(s) => s.span(),
            Stmt::Loop(s) => s.span(),
            Stmt::Conditional(s) => s.span(),
            Stmt::Print(s) => s.span(),
            Stmt::Scan(s) => s.span(),
            Stmt::Return(s) => s.span(),
            Stmt::Call(s) => s.span(),
        }
    }
}

/// A variable declaration, with an optional initial value
#[derive(Debug)]
pub struct Declaration {
    pub ty: TypeName,
    pub name: String,
    pub init: Option<Expr>,
    pub span: Span,
}

impl AstNode for Declaration {
    fn kind(&self) -> NodeKind {
        if self.init.is_some() {
            NodeKind::DeclAssign
        } else {
            NodeKind::Declaration
        }
    }

    fn value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Assigns a new value to a declared name
#[derive(Debug)]
pub struct Assignment {
    pub target: String,
    pub value: Expr,
    pub span: Span,
}

impl AstNode for Assignment {
    fn kind(&self) -> NodeKind {
        NodeKind::Assignment
    }

    fn value(&self) -> Option<&str> {
        Some(&self.target)
    }
}

/// `while condition do ... endwhile`
#[derive(Debug)]
pub struct Loop {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

impl AstNode for Loop {
    fn kind(&self) -> NodeKind {
        NodeKind::Loop
    }
}

/// `if condition then ... [else ... endelse] endif`
#[derive(Debug)]
pub struct Conditional {
    pub condition: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

impl AstNode for Conditional {
    fn kind(&self) -> NodeKind {
        NodeKind::Conditional
    }
}

/// Writes its arguments
#[derive(Debug)]
pub struct Print {
    pub args: ArgList,
    pub span: Span,
}

impl AstNode for Print {
    fn kind(&self) -> NodeKind {
        NodeKind::Print
    }
}

/// Reads into its arguments
#[derive(Debug)]
pub struct Scan {
    pub args: ArgList,
    pub span: Span,
}

impl AstNode for Scan {
    fn kind(&self) -> NodeKind {
        NodeKind::Scan
    }
}

/// Return from a function
#[derive(Debug)]
pub struct Return {
    pub value: Expr,
    pub span: Span,
}

impl AstNode for Return {
    fn kind(&self) -> NodeKind {
        NodeKind::Return
    }
}

crate::impl_spanned!(Declaration, Assignment, Loop, Conditional, Print, Scan, Return);
