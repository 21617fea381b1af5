use crate::node::{AstNode, NodeKind};
use crate::statements::Stmt;
use sprout_tokens::spanned::Span;

/// A `begin ... end` block of statements
#[derive(Debug)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(span: Span, statements: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            span,
            statements: statements.into_iter().collect(),
        }
    }
}

impl AstNode for Block {
    fn kind(&self) -> NodeKind {
        NodeKind::Block
    }
}

crate::impl_spanned!(Block);
