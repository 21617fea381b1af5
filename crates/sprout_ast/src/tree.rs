//! Renders a syntax tree, one node per line.

use crate::block::Block;
use crate::expr::{ArgList, BinaryExpr, Call, Identifier, Literal, NegateExpr};
use crate::items::{FunctionDecl, Param, ParamList, Program, TypeSpec};
use crate::node::AstNode;
use crate::statements::{Assignment, Conditional, Declaration, Loop, Print, Return, Scan};
use crate::visitor::*;
use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// Overrides the visit methods of every concrete node with `enter`, the default walk, then
/// `leave`.
macro_rules! around_nodes {
    ($($node:ident),* $(,)?) => {
        $(
        paste::paste! {
            fn [<visit_ $node:snake>](&mut self, node: &$node) -> Result<(), Self::Err> {
                self.enter(node)?;
                [<visit_ $node:snake>](self, node)?;
                self.leave();
                Ok(())
            }
        }
        )*
    };
}

/// Writes a tree with two spaces of indentation per depth, the node kind, and the node value in
/// quotes if it has one.
///
/// ```text
/// Program
///   Block
///     DeclAssign "x"
///       IntLiteral "5"
/// ```
pub struct TreePrinter<W: Write> {
    writer: W,
    depth: usize,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    /// Prints the program and returns the writer
    pub fn print(mut self, program: &Program) -> Result<W, fmt::Error> {
        self.visit_program(program)?;
        Ok(self.writer)
    }

    fn enter<N: AstNode + ?Sized>(&mut self, node: &N) -> fmt::Result {
        write!(self.writer, "{:indent$}{}", "", node.kind(), indent = self.depth * 2)?;
        if let Some(value) = node.value() {
            write!(self.writer, " {value:?}")?;
        }
        writeln!(self.writer)?;
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

impl<W: Write> Visitor for TreePrinter<W> {
    type Err = fmt::Error;

    around_nodes!(
        Program,
        FunctionDecl,
        ParamList,
        Param,
        TypeSpec,
        Block,
        Declaration,
        Assignment,
        Loop,
        Conditional,
        Print,
        Scan,
        Return,
        BinaryExpr,
        NegateExpr,
        Identifier,
        Literal,
        Call,
        ArgList,
    );
}

/// Counts the nodes of a tree
#[derive(Debug, Default)]
struct NodeCounter {
    count: usize,
}

impl NodeCounter {
    fn enter<N: AstNode + ?Sized>(&mut self, _node: &N) -> Result<(), std::convert::Infallible> {
        self.count += 1;
        Ok(())
    }

    fn leave(&mut self) {}
}

impl Visitor for NodeCounter {
    type Err = std::convert::Infallible;

    around_nodes!(
        Program,
        FunctionDecl,
        ParamList,
        Param,
        TypeSpec,
        Block,
        Declaration,
        Assignment,
        Loop,
        Conditional,
        Print,
        Scan,
        Return,
        BinaryExpr,
        NegateExpr,
        Identifier,
        Literal,
        Call,
        ArgList,
    );
}

/// Counts every node of the program, including the program itself
pub fn count_nodes(program: &Program) -> usize {
    let mut counter = NodeCounter::default();
    match counter.visit_program(program) {
        Ok(()) => counter.count,
        Err(never) => match never {},
    }
}

/// Displays a program as a tree
pub struct TreeDisplay<'a>(&'a Program);

impl Program {
    /// Gets a displayable tree of this program
    pub fn tree(&self) -> TreeDisplay<'_> {
        TreeDisplay(self)
    }
}

impl Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).print(self.0).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Expr, LiteralKind};
    use crate::items::{CallableKind, Item, TypeName};
    use crate::scope::ScopeArena;
    use crate::statements::Stmt;
    use sprout_tokens::spanned::Span;

    fn int(text: &str) -> Expr {
        Expr::Literal(Literal {
            kind: LiteralKind::Int,
            text: text.to_string(),
            span: Span::default(),
        })
    }

    fn sample() -> Program {
        let mut arena = ScopeArena::new();
        let global = arena.create();
        let scope = arena.enter(global);
        let function = FunctionDecl {
            callable: CallableKind::Function,
            name: "f".to_string(),
            return_ty: Some(TypeSpec {
                name: TypeName::Int,
                span: Span::default(),
            }),
            params: ParamList {
                params: vec![Param {
                    ty: TypeSpec {
                        name: TypeName::Float,
                        span: Span::default(),
                    },
                    name: "a".to_string(),
                    span: Span::default(),
                }],
                span: Span::default(),
            },
            body: Block::new(
                Span::default(),
                [Stmt::Return(Return {
                    value: int("1"),
                    span: Span::default(),
                })],
            ),
            scope,
            span: Span::default(),
        };
        let main = Block::new(
            Span::default(),
            [Stmt::Declaration(Declaration {
                ty: TypeName::Int,
                name: "x".to_string(),
                init: Some(int("5")),
                span: Span::default(),
            })],
        );
        Program {
            items: vec![Item::Function(function), Item::Main(main)],
            span: Span::default(),
        }
    }

    #[test]
    fn print_tree() {
        let printed = sample().tree().to_string();
        let expected = "\
Program
  FunctionDecl \"f\"
    TypeInt
    ParamList
      Param \"a\"
        TypeFloat
    Block
      Return
        IntLiteral \"1\"
  Block
    DeclAssign \"x\"
      IntLiteral \"5\"
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn count_every_node() {
        assert_eq!(count_nodes(&sample()), 12);
    }

    #[test]
    fn empty_program() {
        let program = Program {
            items: vec![],
            span: Span::default(),
        };
        assert_eq!(program.tree().to_string(), "Program\n");
        assert_eq!(count_nodes(&program), 1);
    }
}
