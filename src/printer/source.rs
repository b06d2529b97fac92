use crate::ast::{
    ast::{Expr, Program, Stmt},
    statements::{BlockStmt, ExternalItem},
    types::{FnSignature, Parameters, TypeExpr, TypedIdent},
};

const INDENT: &str = "    ";

/// Prints a program back to source, one statement per line.
///
/// Parentheses appear only where the tree holds a `Paren` node, so the
/// output re-parses to the same shape.
pub fn unparse(program: &Program) -> String {
    let mut out = String::new();

    for stmt in &program.body {
        write_stmt(&mut out, stmt, 0);
    }

    out
}

pub fn unparse_expr(expr: &Expr) -> String {
    match expr {
        Expr::Path(path) => path.dotted(),
        Expr::Number(number) => number.value.clone(),
        Expr::String(string) => format!("{}{}{}", string.quote, string.raw(), string.quote),
        Expr::Bool(boolean) => boolean.value.to_string(),
        Expr::Null(_) => String::from("null"),
        Expr::Binary(binary) => format!(
            "{} {} {}",
            unparse_expr(&binary.left),
            binary.operator,
            unparse_expr(&binary.right)
        ),
        Expr::Unary(unary) => format!("{}{}", unary.operator, unparse_expr(&unary.operand)),
        Expr::Conditional(conditional) => format!(
            "{} ? {} : {}",
            unparse_expr(&conditional.condition),
            unparse_expr(&conditional.consequence),
            unparse_expr(&conditional.alternative)
        ),
        Expr::Call(call) => format!(
            "{}({})",
            call.callee.dotted(),
            call.arguments
                .iter()
                .map(unparse_expr)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Expr::Assignment(assignment) => format!(
            "{} {} {}",
            assignment.assignee.dotted(),
            assignment.operator,
            unparse_expr(&assignment.value)
        ),
        Expr::Paren(paren) => format!("({})", unparse_expr(&paren.inner)),
    }
}

fn unparse_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Path(path) => path.dotted(),
        TypeExpr::Pointer(pointer) => format!("*{}", pointer.target.dotted()),
    }
}

fn unparse_typed_ident(ident: &TypedIdent) -> String {
    match &ident.annotation {
        Some(annotation) => format!("{}: {}", ident.name, unparse_type(annotation)),
        None => ident.name.clone(),
    }
}

fn unparse_signature(signature: &FnSignature) -> String {
    let parameters = match &signature.parameters {
        Parameters::Empty => String::new(),
        Parameters::Variadic => String::from("..."),
        Parameters::List { fixed, variadic } => {
            let mut parts: Vec<String> = fixed.iter().map(unparse_typed_ident).collect();
            if *variadic {
                parts.push(String::from("..."));
            }
            parts.join(", ")
        }
    };

    format!(
        "fn {}({}) -> {}",
        signature.name,
        parameters,
        signature.return_type.dotted()
    )
}

fn write_line(out: &mut String, indent: usize, line: &str) {
    out.push_str(&INDENT.repeat(indent));
    out.push_str(line);
    out.push('\n');
}

/// Writes `head do`, the block body one level deeper, then `end` followed by
/// `tail` on the closing line.
fn write_block(out: &mut String, indent: usize, head: &str, block: &BlockStmt, tail: &str) {
    write_line(out, indent, &format!("{} do", head));
    for stmt in block.iter() {
        write_stmt(out, stmt, indent + 1);
    }
    write_line(out, indent, &format!("end{}", tail));
}

fn write_stmt(out: &mut String, stmt: &Stmt, indent: usize) {
    match stmt {
        Stmt::Empty(_) => write_line(out, indent, ";"),
        Stmt::Mod(decl) => write_line(out, indent, &format!("mod {}", decl.name)),
        Stmt::VarDecl(decl) => write_line(
            out,
            indent,
            &format!(
                "let {} = {}",
                unparse_typed_ident(&decl.target),
                unparse_expr(&decl.value)
            ),
        ),
        Stmt::External(external) => {
            let item = match &external.item {
                ExternalItem::Variable(ident) => unparse_typed_ident(ident),
                ExternalItem::Function(signature) => unparse_signature(signature),
            };
            write_line(out, indent, &format!("external {}", item));
        }
        Stmt::FnDecl(decl) => {
            write_block(out, indent, &unparse_signature(&decl.signature), &decl.body, "")
        }
        Stmt::While(stmt) => write_block(
            out,
            indent,
            &format!("while {}", unparse_expr(&stmt.condition)),
            &stmt.body,
            "",
        ),
        Stmt::If(stmt) => {
            let head = format!("if {}", unparse_expr(&stmt.condition));
            match &stmt.alternative {
                Some(alternative) => {
                    write_block(out, indent, &head, &stmt.consequence, " else do");
                    for stmt in alternative.iter() {
                        write_stmt(out, stmt, indent + 1);
                    }
                    write_line(out, indent, "end");
                }
                None => write_block(out, indent, &head, &stmt.consequence, ""),
            }
        }
        Stmt::Return(stmt) => {
            write_line(out, indent, &format!("return {}", unparse_expr(&stmt.value)))
        }
        Stmt::TypeAlias(alias) => write_line(
            out,
            indent,
            &format!("type {} = {}", alias.name, unparse_type(&alias.aliased)),
        ),
        Stmt::Expression(stmt) => write_line(out, indent, &unparse_expr(&stmt.expression)),
    }
}
