use std::slice::Iter;

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    types::{FnSignature, TypeExpr, TypedIdent},
};

/// A `do ... end` block.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct EmptyStmt {
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `mod name`
#[derive(Debug, Clone)]
pub struct ModDeclStmt {
    pub name: String,
    pub span: Span,
}

/// `let name[: type] = value`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub target: TypedIdent,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ExternalItem {
    Variable(TypedIdent),
    Function(FnSignature),
}

/// `external name[: type]` or `external fn name(params) -> type`
#[derive(Debug, Clone)]
pub struct ExternalStmt {
    pub item: ExternalItem,
    pub span: Span,
}

/// `fn name(params) -> type do ... end`
#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub signature: FnSignature,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
    pub span: Span,
}

/// `if cond do ... end [else do ... end]`
///
/// An `else if` chain is an alternative block holding a single `if`.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Expr,
    pub span: Span,
}

/// `type name = *target` or `type name = a.b`
#[derive(Debug, Clone)]
pub struct TypeAliasStmt {
    pub name: String,
    pub aliased: TypeExpr,
    pub span: Span,
}
