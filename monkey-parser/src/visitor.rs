//! Visitor pattern for AST nodes.

use crate::ast::{BlockStmt, Expr, Identifier, Stmt};

pub trait Visitor<'ast>: Sized {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }
    fn visit_identifier(&mut self, _ident: &'ast Identifier) {}
}

/// Iteratively visit all statements in a [`BlockStmt`].
fn walk_block<'ast>(visitor: &mut impl Visitor<'ast>, block: &'ast BlockStmt) {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_expr<'ast>(visitor: &mut impl Visitor<'ast>, expr: &'ast Expr) {
    match expr {
        Expr::IntegerLit { .. } => {}
        Expr::BoolLit { .. } => {}
        Expr::Identifier(ident) => visitor.visit_identifier(ident),
        Expr::Prefix { rhs, .. } => visitor.visit_expr(rhs),
        Expr::Infix { lhs, rhs, .. } => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        Expr::If {
            condition,
            consequence,
            alternative,
            ..
        } => {
            visitor.visit_expr(condition);
            walk_block(visitor, consequence);
            if let Some(alternative) = alternative {
                walk_block(visitor, alternative);
            }
        }
        Expr::FnLit { params, body, .. } => {
            for param in params {
                visitor.visit_identifier(param);
            }
            walk_block(visitor, body);
        }
        Expr::FnCall { function, args, .. } => {
            visitor.visit_expr(function);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
    }
}

pub fn walk_stmt<'ast>(visitor: &mut impl Visitor<'ast>, stmt: &'ast Stmt) {
    match stmt {
        Stmt::LetStmt { name, value, .. } => {
            visitor.visit_identifier(name);
            visitor.visit_expr(value);
        }
        Stmt::ReturnStmt { value, .. } => visitor.visit_expr(value),
        Stmt::ExprStmt { expr, .. } => visitor.visit_expr(expr),
    }
}
