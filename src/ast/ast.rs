use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BinaryExpr, BoolExpr, CallExpr, ConditionalExpr, NullExpr, NumberExpr,
        ParenExpr, StringExpr, UnaryExpr,
    },
    statements::{
        EmptyStmt, ExpressionStmt, ExternalStmt, FnDeclStmt, IfStmt, ModDeclStmt, ReturnStmt,
        TypeAliasStmt, VarDeclStmt, WhileStmt,
    },
    types::IdentPath,
};

/// Expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    Path(IdentPath),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Conditional(ConditionalExpr),
    Call(CallExpr),
    Assignment(AssignmentExpr),
    Paren(ParenExpr),
    Number(NumberExpr),
    String(StringExpr),
    Bool(BoolExpr),
    Null(NullExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Path(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Conditional(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::Paren(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Bool(expr) => &expr.span,
            Expr::Null(expr) => &expr.span,
        }
    }

    /// Short description of the node kind, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Expr::Path(_) => "identifier path",
            Expr::Binary(_) => "binary expression",
            Expr::Unary(_) => "unary expression",
            Expr::Conditional(_) => "conditional expression",
            Expr::Call(_) => "call expression",
            Expr::Assignment(_) => "assignment expression",
            Expr::Paren(_) => "parenthesized expression",
            Expr::Number(_) => "number literal",
            Expr::String(_) => "string literal",
            Expr::Bool(_) => "boolean literal",
            Expr::Null(_) => "null literal",
        }
    }
}

/// Statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    Empty(EmptyStmt),
    Mod(ModDeclStmt),
    VarDecl(VarDeclStmt),
    External(ExternalStmt),
    FnDecl(FnDeclStmt),
    While(WhileStmt),
    If(IfStmt),
    Return(ReturnStmt),
    TypeAlias(TypeAliasStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Empty(stmt) => &stmt.span,
            Stmt::Mod(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::External(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::TypeAlias(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }
}

/// Root of a parsed source unit.
#[derive(Debug, Clone)]
pub struct Program {
    /// Name from the first top-level `mod` declaration, if any.
    pub module: Option<String>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Program {
    pub fn new(body: Vec<Stmt>, span: Span) -> Self {
        let module = body.iter().find_map(|stmt| match stmt {
            Stmt::Mod(decl) => Some(decl.name.clone()),
            _ => None,
        });

        Program { module, body, span }
    }
}
