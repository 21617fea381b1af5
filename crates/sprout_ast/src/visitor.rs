//! Read-only traversal of the syntax tree.
//!
//! Every default walk visits children in source order.

use crate::block::Block;
use crate::expr::{ArgList, BinaryExpr, Call, Expr, Identifier, Literal, NegateExpr};
use crate::items::{FunctionDecl, Item, Param, ParamList, Program, TypeSpec};
use crate::statements::{Assignment, Conditional, Declaration, Loop, Print, Return, Scan, Stmt};
use sprout_visitor_gen::visit;

visit! {
    pub trait Visitor {
        pub visit(v, program: &Program) -> Result<()> {
            for item in &program.items {
                v.visit_item(item)?;
            }
            Ok(())
        }
        pub visit(v, item: &Item) -> Result<()> {
            match item {
                Item::Function(function) => v.visit_function_decl(function),
                Item::Main(block) => v.visit_block(block),
            }
        }
        pub visit(v, function: &FunctionDecl) -> Result<()> {
            if let Some(return_ty) = &function.return_ty {
                v.visit_type_spec(return_ty)?;
            }
            v.visit_param_list(&function.params)?;
            v.visit_block(&function.body)
        }
        pub visit(v, params: &ParamList) -> Result<()> {
            for param in &params.params {
                v.visit_param(param)?;
            }
            Ok(())
        }
        pub visit(v, param: &Param) -> Result<()> {
            v.visit_type_spec(&param.ty)
        }
        pub visit(_v, _ty: &TypeSpec) -> Result<()> {
            Ok(())
        }
        pub visit(v, block: &Block) -> Result<()> {
            for stmt in &block.statements {
                v.visit_stmt(stmt)?;
            }
            Ok(())
        }
        pub visit(v, stmt: &Stmt) -> Result<()> {
            match stmt {
                Stmt::Declaration(s) => v.visit_declaration(s),
                Stmt::Assignment(s) => v.visit_assignment(s),
                Stmt::Loop(s) => v.visit_loop(s),
                Stmt::Conditional(s) => v.visit_conditional(s),
                Stmt::Print(s) => v.visit_print(s),
                Stmt::Scan(s) => v.visit_scan(s),
                Stmt::Return(s) => v.visit_return(s),
                Stmt::Call(s) => v.visit_call(s),
            }
        }
        pub visit(v, decl: &Declaration) -> Result<()> {
            match &decl.init {
                Some(init) => v.visit_expr(init),
                None => Ok(()),
            }
        }
        pub visit(v, assignment: &Assignment) -> Result<()> {
            v.visit_expr(&assignment.value)
        }
        pub visit(v, lp: &Loop) -> Result<()> {
            v.visit_expr(&lp.condition)?;
            v.visit_block(&lp.body)
        }
        pub visit(v, cond: &Conditional) -> Result<()> {
            v.visit_expr(&cond.condition)?;
            v.visit_block(&cond.then_block)?;
            if let Some(else_block) = &cond.else_block {
                v.visit_block(else_block)?;
            }
            Ok(())
        }
        pub visit(v, print: &Print) -> Result<()> {
            v.visit_arg_list(&print.args)
        }
        pub visit(v, scan: &Scan) -> Result<()> {
            v.visit_arg_list(&scan.args)
        }
        pub visit(v, ret: &Return) -> Result<()> {
            v.visit_expr(&ret.value)
        }
        pub visit(v, expr: &Expr) -> Result<()> {
            match expr {
                Expr::Binary(e) => v.visit_binary_expr(e),
                Expr::Negate(e) => v.visit_negate_expr(e),
                Expr::Identifier(e) => v.visit_identifier(e),
                Expr::Literal(e) => v.visit_literal(e),
                Expr::Call(e) => v.visit_call(e),
            }
        }
        pub visit(v, binary: &BinaryExpr) -> Result<()> {
            v.visit_expr(&binary.lhs)?;
            v.visit_expr(&binary.rhs)
        }
        pub visit(v, negate: &NegateExpr) -> Result<()> {
            v.visit_expr(&negate.operand)
        }
        pub visit(_v, _ident: &Identifier) -> Result<()> {
            Ok(())
        }
        pub visit(_v, _literal: &Literal) -> Result<()> {
            Ok(())
        }
        pub visit(v, call: &Call) -> Result<()> {
            v.visit_arg_list(&call.args)
        }
        pub visit(v, args: &ArgList) -> Result<()> {
            for arg in &args.args {
                v.visit_expr(arg)?;
            }
            Ok(())
        }
    }
}
