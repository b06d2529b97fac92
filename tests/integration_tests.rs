//! Integration tests for the full front end.
//!
//! These tests run source text through tokenization and parsing via
//! `parse_source` and check the resulting tree, its printed forms and the
//! errors surfaced to callers. Set `RUST_LOG=palu=trace` to see the
//! parser's statement dispatch.

use palu::{
    ast::{
        ast::{Expr, Stmt},
        statements::ExternalItem,
        types::{Parameters, TypeExpr},
    },
    errors::errors::{ErrorImpl, ErrorKind},
    parse_source,
    printer::{sexp::sexp, source::unparse},
};

const FIB: &str = "\
mod fib

type bytes = *u8
external fn printf(fmt: bytes, ...) -> i32

fn fib(n: i32) -> i32 do
    if n == 1 do
        return 0
    end

    if n == 2 do
        return 1
    end

    return fib(n-1) + fib(n-2)
end
";

#[test_log::test]
fn test_parse_fib_program() {
    let program = parse_source(FIB, Some("fib.palu".to_string())).unwrap();

    assert_eq!(program.module.as_deref(), Some("fib"));
    assert_eq!(program.body.len(), 4);

    match &program.body[1] {
        Stmt::TypeAlias(alias) => {
            assert_eq!(alias.name, "bytes");
            assert!(matches!(alias.aliased, TypeExpr::Pointer(_)));
        }
        other => panic!("expected type alias, got {:?}", other),
    }

    match &program.body[2] {
        Stmt::External(external) => match &external.item {
            ExternalItem::Function(signature) => {
                assert_eq!(signature.name, "printf");
                assert_eq!(signature.parameters.fixed().len(), 1);
                assert!(signature.parameters.is_variadic());
                assert_eq!(signature.return_type.dotted(), "i32");
            }
            other => panic!("expected external fn, got {:?}", other),
        },
        other => panic!("expected external, got {:?}", other),
    }

    match &program.body[3] {
        Stmt::FnDecl(decl) => {
            assert_eq!(decl.signature.name, "fib");
            assert_eq!(decl.body.len(), 3);
            assert_eq!(decl.span.start.line, 6);
            assert_eq!(decl.span.end.line, 16);
            assert!(matches!(decl.body.body[2], Stmt::Return(_)));
        }
        other => panic!("expected fn, got {:?}", other),
    }
}

#[test_log::test]
fn test_fib_shape() {
    let program = parse_source(FIB, None).unwrap();

    assert_eq!(
        sexp(&program),
        "(mod fib)\n\
         (type bytes (* u8))\n\
         (external (fn printf (params (: fmt bytes) ...) i32))\n\
         (fn fib (params (: n i32)) i32 (block \
         (if (binary == n 1) (block (return 0))) \
         (if (binary == n 2) (block (return 1))) \
         (return (binary + (call fib (binary - n 1)) (call fib (binary - n 2))))))"
    );
}

#[test_log::test]
fn test_fib_round_trip() {
    let program = parse_source(FIB, None).unwrap();
    let printed = unparse(&program);
    let reparsed = parse_source(&printed, None).unwrap();

    assert_eq!(sexp(&reparsed), sexp(&program));
    assert_eq!(unparse(&reparsed), printed);
}

#[test_log::test]
fn test_comments_are_ignored() {
    let source = "\
// line comment \\
   continued here
let x = /* inline */ 1
/* block
   comment */
x = x * 2
";
    let program = parse_source(source, None).unwrap();

    assert_eq!(sexp(&program), "(let x 1)\n(assign = x (binary * x 2))");
}

#[test_log::test]
fn test_empty_source() {
    let program = parse_source("", None).unwrap();

    assert!(program.body.is_empty());
    assert!(program.module.is_none());
}

#[test_log::test]
fn test_parse_variadic_function() {
    let program = parse_source("fn f(a: int, ...) -> int do end", None).unwrap();

    match &program.body[0] {
        Stmt::FnDecl(decl) => {
            assert!(matches!(
                decl.signature.parameters,
                Parameters::List { variadic: true, .. }
            ));
            assert!(decl.body.is_empty());
        }
        other => panic!("expected fn, got {:?}", other),
    }
}

#[test_log::test]
fn test_parse_call_on_path() {
    let program = parse_source("a.b.c(1, 2)", None).unwrap();

    match &program.body[0] {
        Stmt::Expression(stmt) => {
            assert!(matches!(&stmt.expression, Expr::Call(call) if call.callee.segments().len() == 3))
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test_log::test]
fn test_lex_error_unterminated_string() {
    let error = parse_source("let x = 'abc", Some("bad.palu".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(
        error.to_string(),
        "bad.palu:1:9: unterminated string literal"
    );
}

#[test_log::test]
fn test_lex_error_string_broken_by_newline() {
    let error = parse_source("let x = \"abc\nlet y = 1", None).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
}

#[test_log::test]
fn test_parse_error_missing_expression() {
    let error = parse_source("let x = ", Some("bad.palu".to_string())).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        error.to_string(),
        "bad.palu:1:9: expected expression, found end of input"
    );
    assert_eq!(
        error.get_tip().to_string(),
        "Expected expression, found end of input"
    );
}

#[test_log::test]
fn test_parse_error_missing_end() {
    let error = parse_source("fn main() -> i32 do\n    return 0\n", None).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: "`end`".to_string(),
            found: "end of input".to_string(),
        }
    );
}

#[test_log::test]
fn test_parse_error_variadic_not_last() {
    let error = parse_source("fn g(a: int, ..., b: int) -> int do end", None).unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedParameters");
}
