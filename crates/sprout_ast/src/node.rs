//! The closed set of node kinds and the trait every node implements

use sprout_tokens::spanned::Spanned;

/// The tag of a syntax tree node
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum NodeKind {
    Program,
    Block,
    Declaration,
    /// A declaration with an initializer, ie `int x = 5;`
    DeclAssign,
    Assignment,
    Loop,
    Conditional,
    Print,
    Scan,
    Return,
    FunctionDecl,
    ProcedureDecl,
    ParamList,
    Param,
    Call,
    ArgList,
    Add,
    Sub,
    Mul,
    Div,
    Negate,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Identifier,
    IntLiteral,
    FloatLiteral,
    TypeInt,
    TypeFloat,
}

/// Common information for every node of the tree
pub trait AstNode: Spanned {
    /// The tag of this node
    fn kind(&self) -> NodeKind;

    /// The identifier name or literal text attached to this node, if any
    fn value(&self) -> Option<&str> {
        None
    }
}
