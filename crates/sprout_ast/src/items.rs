//! Top level items of a program

use crate::block::Block;
use crate::node::{AstNode, NodeKind};
use crate::scope::ScopeId;
use crate::symbol::{DataType, SymbolKind};
use sprout_tokens::spanned::{Span, Spanned};

/// A whole program
#[derive(Debug)]
pub struct Program {
    pub items: Vec<Item>,
    pub span: Span,
}

impl Program {
    /// All function and procedure declarations, in source order
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            Item::Main(_) => None,
        })
    }

    /// The main block, if the program has one
    pub fn main(&self) -> Option<&Block> {
        self.items.iter().find_map(|item| match item {
            Item::Main(block) => Some(block),
            Item::Function(_) => None,
        })
    }
}

impl AstNode for Program {
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
}

/// An item at the top of a program
#[derive(Debug)]
pub enum Item {
    Function(FunctionDecl),
    Main(Block),
}

impl Spanned for Item {
    fn span(&self) -> Span {
        match self {
            Item::Function(function) => function.span(),
            Item::Main(block) => block.span(),
        }
    }
}

/// Whether a callable returns a value
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CallableKind {
    Function,
    Procedure,
}

impl CallableKind {
    pub fn symbol_kind(&self) -> SymbolKind {
        match self {
            CallableKind::Function => SymbolKind::Function,
            CallableKind::Procedure => SymbolKind::Procedure,
        }
    }
}

/// A function or procedure declaration.
///
/// `scope` is the private scope holding the parameters and locals, owned by the arena of the
/// translation unit this declaration belongs to.
#[derive(Debug)]
pub struct FunctionDecl {
    pub callable: CallableKind,
    pub name: String,
    /// Only functions have a written return type
    pub return_ty: Option<TypeSpec>,
    pub params: ParamList,
    pub body: Block,
    pub scope: ScopeId,
    pub span: Span,
}

impl FunctionDecl {
    /// The declared return type, `void` for procedures
    pub fn return_data_type(&self) -> DataType {
        self.return_ty
            .as_ref()
            .map(|ty| ty.name.data_type())
            .unwrap_or(DataType::Void)
    }
}

impl AstNode for FunctionDecl {
    fn kind(&self) -> NodeKind {
        match self.callable {
            CallableKind::Function => NodeKind::FunctionDecl,
            CallableKind::Procedure => NodeKind::ProcedureDecl,
        }
    }

    fn value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// The parenthesized parameters of a declaration
#[derive(Debug)]
pub struct ParamList {
    pub params: Vec<Param>,
    pub span: Span,
}

impl AstNode for ParamList {
    fn kind(&self) -> NodeKind {
        NodeKind::ParamList
    }
}

/// A single parameter
#[derive(Debug)]
pub struct Param {
    pub ty: TypeSpec,
    pub name: String,
    pub span: Span,
}

impl AstNode for Param {
    fn kind(&self) -> NodeKind {
        NodeKind::Param
    }

    fn value(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A type name as written in source
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Float,
}

impl TypeName {
    pub fn data_type(&self) -> DataType {
        match self {
            TypeName::Int => DataType::Integer,
            TypeName::Float => DataType::Float,
        }
    }
}

/// A type marker within a signature
#[derive(Debug)]
pub struct TypeSpec {
    pub name: TypeName,
    pub span: Span,
}

impl AstNode for TypeSpec {
    fn kind(&self) -> NodeKind {
        match self.name {
            TypeName::Int => NodeKind::TypeInt,
            TypeName::Float => NodeKind::TypeFloat,
        }
    }
}

crate::impl_spanned!(Program, FunctionDecl, ParamList, Param, TypeSpec);
