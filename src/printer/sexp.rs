use crate::ast::{
    ast::{Expr, Program, Stmt},
    statements::{BlockStmt, ExternalItem},
    types::{FnSignature, Parameters, TypeExpr, TypedIdent},
};

/// Renders a program as one S-expression per top-level statement, one per
/// line. Spans are not part of the output, so two trees print the same iff
/// they have the same shape.
pub fn sexp(program: &Program) -> String {
    program
        .body
        .iter()
        .map(stmt_sexp)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn expr_sexp(expr: &Expr) -> String {
    match expr {
        Expr::Path(path) => path.dotted(),
        Expr::Number(number) => number.value.clone(),
        Expr::String(string) => format!("{}{}{}", string.quote, string.raw(), string.quote),
        Expr::Bool(boolean) => boolean.value.to_string(),
        Expr::Null(_) => String::from("null"),
        Expr::Binary(binary) => format!(
            "(binary {} {} {})",
            binary.operator,
            expr_sexp(&binary.left),
            expr_sexp(&binary.right)
        ),
        Expr::Unary(unary) => format!("(unary {} {})", unary.operator, expr_sexp(&unary.operand)),
        Expr::Conditional(conditional) => format!(
            "(cond {} {} {})",
            expr_sexp(&conditional.condition),
            expr_sexp(&conditional.consequence),
            expr_sexp(&conditional.alternative)
        ),
        Expr::Call(call) => {
            let mut out = format!("(call {}", call.callee.dotted());
            for argument in &call.arguments {
                out.push(' ');
                out.push_str(&expr_sexp(argument));
            }
            out.push(')');
            out
        }
        Expr::Assignment(assignment) => format!(
            "(assign {} {} {})",
            assignment.operator,
            assignment.assignee.dotted(),
            expr_sexp(&assignment.value)
        ),
        Expr::Paren(paren) => format!("(paren {})", expr_sexp(&paren.inner)),
    }
}

fn type_sexp(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Path(path) => path.dotted(),
        TypeExpr::Pointer(pointer) => format!("(* {})", pointer.target.dotted()),
    }
}

fn typed_ident_sexp(ident: &TypedIdent) -> String {
    match &ident.annotation {
        Some(annotation) => format!("(: {} {})", ident.name, type_sexp(annotation)),
        None => ident.name.clone(),
    }
}

fn parameters_sexp(parameters: &Parameters) -> String {
    let mut out = String::from("(params");

    for parameter in parameters.fixed() {
        out.push(' ');
        out.push_str(&typed_ident_sexp(parameter));
    }
    if parameters.is_variadic() {
        out.push_str(" ...");
    }

    out.push(')');
    out
}

fn signature_sexp(signature: &FnSignature) -> String {
    format!(
        "{} {} {}",
        signature.name,
        parameters_sexp(&signature.parameters),
        signature.return_type.dotted()
    )
}

fn block_sexp(block: &BlockStmt) -> String {
    let mut out = String::from("(block");
    for stmt in block.iter() {
        out.push(' ');
        out.push_str(&stmt_sexp(stmt));
    }
    out.push(')');
    out
}

pub fn stmt_sexp(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Empty(_) => String::from("(empty)"),
        Stmt::Mod(decl) => format!("(mod {})", decl.name),
        Stmt::VarDecl(decl) => format!(
            "(let {} {})",
            typed_ident_sexp(&decl.target),
            expr_sexp(&decl.value)
        ),
        Stmt::External(external) => match &external.item {
            ExternalItem::Variable(ident) => format!("(external {})", typed_ident_sexp(ident)),
            ExternalItem::Function(signature) => {
                format!("(external (fn {}))", signature_sexp(signature))
            }
        },
        Stmt::FnDecl(decl) => format!(
            "(fn {} {})",
            signature_sexp(&decl.signature),
            block_sexp(&decl.body)
        ),
        Stmt::While(stmt) => format!(
            "(while {} {})",
            expr_sexp(&stmt.condition),
            block_sexp(&stmt.body)
        ),
        Stmt::If(stmt) => match &stmt.alternative {
            Some(alternative) => format!(
                "(if {} {} {})",
                expr_sexp(&stmt.condition),
                block_sexp(&stmt.consequence),
                block_sexp(alternative)
            ),
            None => format!(
                "(if {} {})",
                expr_sexp(&stmt.condition),
                block_sexp(&stmt.consequence)
            ),
        },
        Stmt::Return(stmt) => format!("(return {})", expr_sexp(&stmt.value)),
        Stmt::TypeAlias(alias) => format!("(type {} {})", alias.name, type_sexp(&alias.aliased)),
        Stmt::Expression(stmt) => expr_sexp(&stmt.expression),
    }
}
