//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Operator precedence and associativity
//! - Sign disambiguation between literals and operators
//! - Calls over identifier paths
//! - Declarations, blocks and control flow
//! - Parameter lists
//! - Error cases
//!
//! Tree shapes are compared through their S-expression rendering.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        types::Parameters,
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
    printer::sexp::sexp,
};

use super::parser::{parse, MAX_NESTING_DEPTH};

fn try_parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.palu".to_string()))?;
    parse(tokens, Rc::new("test.palu".to_string()))
}

fn parse_ok(source: &str) -> Program {
    try_parse(source).unwrap()
}

fn shape(source: &str) -> String {
    sexp(&parse_ok(source))
}

fn parse_err(source: &str) -> Error {
    try_parse(source).unwrap_err()
}

fn unexpected(expected: &str, found: &str) -> ErrorImpl {
    ErrorImpl::UnexpectedToken {
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

#[test]
fn test_parse_multiplication_binds_tighter() {
    assert_eq!(shape("1 + 2 * 3"), "(binary + 1 (binary * 2 3))");
}

#[test]
fn test_parse_binary_is_left_associative() {
    assert_eq!(shape("a - b - c"), "(binary - (binary - a b) c)");
    assert_eq!(shape("a / b * c"), "(binary * (binary / a b) c)");
}

#[test]
fn test_parse_precedence_ladder() {
    assert_eq!(
        shape("a || b && c | d ^ e & f == g < h << i + j * k"),
        "(binary || a (binary && b (binary | c (binary ^ d (binary & e (binary == f \
         (binary < g (binary << h (binary + i (binary * j k))))))))))"
    );
}

#[test]
fn test_parse_assignment_is_right_associative() {
    assert_eq!(shape("a = b = 1"), "(assign = a (assign = b 1))");
}

#[test]
fn test_parse_compound_assignment() {
    assert_eq!(shape("x.y += 2"), "(assign += x.y 2)");
    assert_eq!(shape("x <<= 1 + 1"), "(assign <<= x (binary + 1 1))");
}

#[test]
fn test_parse_conditional() {
    assert_eq!(shape("a ? b : c ? d : e"), "(cond a b (cond c d e))");
    assert_eq!(shape("a ? b ? c : d : e"), "(cond a (cond b c d) e)");
    assert_eq!(shape("x = a || b ? 1 : 2"), "(assign = x (cond (binary || a b) 1 2))");
}

#[test]
fn test_parse_number_with_bare_exponent() {
    assert_eq!(shape("x = 1e"), "(assign = x 1e)");
    assert_eq!(shape("x = 0x1pA * 2"), "(assign = x (binary * 0x1pA 2))");
}

#[test]
fn test_parse_leading_sign_is_unary() {
    assert_eq!(shape("-1 + 2"), "(binary + (unary - 1) 2)");
    assert_eq!(shape("+1"), "(unary + 1)");
}

#[test]
fn test_parse_sign_after_operator_is_unary() {
    assert_eq!(shape("1 - - 2"), "(binary - 1 (unary - 2))");
    assert_eq!(shape("1 - -2"), "(binary - 1 (unary - 2))");
}

#[test]
fn test_parse_sign_after_operand_is_binary() {
    assert_eq!(shape("n-1"), "(binary - n 1)");
    assert_eq!(shape("f(x)+2"), "(binary + (call f x) 2)");
}

#[test]
fn test_parse_prefix_operators() {
    assert_eq!(shape("!!x"), "(unary ! (unary ! x))");
    assert_eq!(shape("-a * b"), "(binary * (unary - a) b)");
    assert_eq!(shape("~f(1)"), "(unary ~ (call f 1))");
}

#[test]
fn test_parse_call_on_path() {
    let program = parse_ok("a.b.c(1, 2)");

    match &program.body[0] {
        Stmt::Expression(stmt) => match &stmt.expression {
            Expr::Call(call) => {
                assert_eq!(call.callee.segments(), ["a", "b", "c"]);
                assert_eq!(call.arguments.len(), 2);
            }
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }

    assert_eq!(sexp(&program), "(call a.b.c 1 2)");
}

#[test]
fn test_parse_call_arguments() {
    assert_eq!(shape("f()"), "(call f)");
    assert_eq!(shape("f(g(1), a = 2)"), "(call f (call g 1) (assign = a 2))");
}

#[test]
fn test_parse_grouping_is_kept() {
    assert_eq!(shape("(1 + 2) * 3"), "(binary * (paren (binary + 1 2)) 3)");
}

#[test]
fn test_parse_literals() {
    assert_eq!(
        shape("f(true, false, null, 0x1F, 'a\\n')"),
        "(call f true false null 0x1F 'a\\n')"
    );
}

#[test]
fn test_parse_string_value() {
    let program = parse_ok("let s = \"a\\tb\"");

    match &program.body[0] {
        Stmt::VarDecl(decl) => match &decl.value {
            Expr::String(string) => {
                assert_eq!(string.quote, '"');
                assert_eq!(string.value().as_deref(), Some("a\tb"));
            }
            other => panic!("expected string, got {:?}", other),
        },
        other => panic!("expected let, got {:?}", other),
    }
}

#[test]
fn test_parse_declarations() {
    let program = parse_ok(
        "mod main\n\
         external printf: *u8\n\
         external fn puts(s: *u8, ...) -> i32\n\
         type str = *u8\n\
         type num = std.i32\n\
         let x: i32 = 1\n\
         let y = x\n\
         ;",
    );

    assert_eq!(program.module.as_deref(), Some("main"));
    assert_eq!(
        sexp(&program),
        "(mod main)\n\
         (external (: printf (* u8)))\n\
         (external (fn puts (params (: s (* u8)) ...) i32))\n\
         (type str (* u8))\n\
         (type num std.i32)\n\
         (let (: x i32) 1)\n\
         (let y x)\n\
         (empty)"
    );
}

#[test]
fn test_parse_program_without_module() {
    assert!(parse_ok("let x = 1").module.is_none());
    assert!(parse_ok("").body.is_empty());
}

#[test]
fn test_parse_function_declaration() {
    assert_eq!(
        shape("fn add(a: i32, b: i32) -> i32 do return a + b end"),
        "(fn add (params (: a i32) (: b i32)) i32 (block (return (binary + a b))))"
    );
}

#[test]
fn test_parse_while_loop() {
    assert_eq!(
        shape("while x < 10 do x += 1 end"),
        "(while (binary < x 10) (block (assign += x 1)))"
    );
}

#[test]
fn test_parse_if_without_else() {
    assert_eq!(shape("if a do b() end"), "(if a (block (call b)))");
}

#[test]
fn test_parse_else_if_is_nested_block() {
    let program = parse_ok("if a do end else do if b do end end");

    assert_eq!(sexp(&program), "(if a (block) (block (if b (block))))");

    match &program.body[0] {
        Stmt::If(stmt) => {
            let alternative = stmt.alternative.as_ref().unwrap();
            assert!(stmt.consequence.is_empty());
            assert_eq!(alternative.len(), 1);
            assert!(matches!(alternative.body[0], Stmt::If(_)));
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn test_parse_variadic_parameters() {
    let program = parse_ok("fn f(a: int, ...) -> int do end");

    match &program.body[0] {
        Stmt::FnDecl(decl) => match &decl.signature.parameters {
            Parameters::List { fixed, variadic } => {
                assert_eq!(fixed.len(), 1);
                assert_eq!(fixed[0].name, "a");
                assert!(*variadic);
            }
            other => panic!("expected parameter list, got {:?}", other),
        },
        other => panic!("expected fn, got {:?}", other),
    }

    assert_eq!(
        shape("fn g(a: int, b: int, ...) -> int do return a end"),
        "(fn g (params (: a int) (: b int) ...) int (block (return a)))"
    );
}

#[test]
fn test_parse_parameter_markers() {
    assert!(matches!(fn_parameters("fn f() -> i32 do end"), Parameters::Empty));
    assert!(matches!(fn_parameters("fn f(void) -> void do end"), Parameters::Empty));
    assert!(matches!(fn_parameters("fn f(...) -> i32 do end"), Parameters::Variadic));
    assert!(!fn_parameters("fn f(a) -> i32 do end").is_variadic());
}

fn fn_parameters(source: &str) -> Parameters {
    match parse_ok(source).body.into_iter().next() {
        Some(Stmt::FnDecl(decl)) => decl.signature.parameters,
        other => panic!("expected fn, got {:?}", other),
    }
}

#[test]
fn test_parse_misplaced_variadic_marker() {
    let error = parse_err("fn h(..., a: int) -> int do end");
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::MalformedParameters {
            found: "`,`".to_string()
        }
    );
    assert_eq!(error.get_position().column, 9);

    let error = parse_err("fn h(a: int, ..., b: int) -> int do end");
    assert!(matches!(error.get_impl(), ErrorImpl::MalformedParameters { .. }));
    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn test_parse_missing_expression() {
    let error = parse_err("let x = ");

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.get_impl(), &unexpected("expression", "end of input"));
    assert_eq!(error.get_position().offset, 8);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_parse_unterminated_string_is_lex_error() {
    let error = parse_err("let x = 'abc");

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
}

#[test]
fn test_parse_missing_end() {
    let error = parse_err("while x do\n  x = 1\n");
    assert_eq!(error.get_impl(), &unexpected("`end`", "end of input"));
    assert_eq!(error.get_position().line, 3);
}

#[test]
fn test_parse_missing_arrow() {
    let error = parse_err("fn f() i32 do end");
    assert_eq!(error.get_impl(), &unexpected("`->`", "identifier `i32`"));
}

#[test]
fn test_parse_missing_do() {
    let error = parse_err("if a end");
    assert_eq!(error.get_impl(), &unexpected("`do`", "`end`"));
}

#[test]
fn test_parse_bad_argument_separator() {
    let error = parse_err("f(1 2)");
    assert_eq!(error.get_impl(), &unexpected("`,` or `)`", "number `2`"));
}

#[test]
fn test_parse_missing_initializer() {
    let error = parse_err("let x: i32");
    assert_eq!(error.get_impl(), &unexpected("`=`", "end of input"));
}

#[test]
fn test_parse_invalid_assignment_targets() {
    let error = parse_err("1 = 2");
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::InvalidAssignmentTarget {
            found: "number literal".to_string()
        }
    );

    let error = parse_err("let y = (a) = 1");
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::InvalidAssignmentTarget {
            found: "parenthesized expression".to_string()
        }
    );
    assert_eq!(error.get_position().column, 9);

    let error = parse_err("f() += 1");
    assert!(matches!(error.get_impl(), ErrorImpl::InvalidAssignmentTarget { .. }));
}

#[test]
fn test_parse_unknown_character() {
    let error = parse_err("let x = @");
    assert_eq!(error.get_impl(), &unexpected("expression", "`@`"));
}

#[test]
fn test_parse_void_type_positions() {
    assert_eq!(
        shape("external fn exit(code: i32) -> void\ntype handle = *void"),
        "(external (fn exit (params (: code i32)) void))\n(type handle (* void))"
    );
}

#[test]
fn test_parse_spans() {
    let program = parse_ok("let x = 1 + 23");

    match &program.body[0] {
        Stmt::VarDecl(decl) => {
            let span = decl.value.get_span();
            assert_eq!(span.start.column, 9);
            assert_eq!(span.end.column, 15);
            assert_eq!(decl.span.start.column, 1);
            assert_eq!(decl.span.end.offset, 14);
        }
        other => panic!("expected let, got {:?}", other),
    }
}

#[test]
fn test_parse_split_sign_spans() {
    let program = parse_ok("x = -12");

    match &program.body[0] {
        Stmt::Expression(stmt) => match &stmt.expression {
            Expr::Assignment(assignment) => match assignment.value.as_ref() {
                Expr::Unary(unary) => {
                    assert_eq!(unary.span.start.column, 5);
                    assert_eq!(unary.operand.get_span().start.column, 6);
                    assert_eq!(unary.span.end.column, 8);
                }
                other => panic!("expected unary, got {:?}", other),
            },
            other => panic!("expected assignment, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn assert_too_deep(source: &str) {
    let error = parse_err(source);

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
}

#[test]
fn test_parse_rejects_deep_grouping() {
    assert_too_deep(&format!("x = {}1{}", "(".repeat(3000), ")".repeat(3000)));
}

#[test]
fn test_parse_rejects_deep_prefix_chain() {
    assert_too_deep(&format!("{}x", "!".repeat(3000)));
}

#[test]
fn test_parse_rejects_deep_blocks() {
    assert_too_deep(&format!("{}{}", "while a do ".repeat(3000), "end ".repeat(3000)));
}

#[test]
fn test_parse_rejects_deep_assignment_chain() {
    assert_too_deep(&format!("{}1", "a = ".repeat(3000)));
}

#[test]
fn test_parse_accepts_nesting_below_limit() {
    let depth = MAX_NESTING_DEPTH / 2;
    let program = parse_ok(&format!("x = {}1{}", "(".repeat(depth), ")".repeat(depth)));

    assert_eq!(program.body.len(), 1);
    assert!(shape("while a do while b do end end").starts_with("(while a"));
}
