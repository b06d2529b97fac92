use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AssignOp, AssignmentExpr, BinaryExpr, BinaryOp, BoolExpr, CallExpr, ConditionalExpr,
            NullExpr, NumberExpr, ParenExpr, StringExpr, UnaryExpr, UnaryOp,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, types::parse_ident_path};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.descend()?;
    let expr = parse_expr_at_depth(parser, bp);
    parser.ascend();
    expr
}

fn parse_expr_at_depth(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let nud = parser
        .get_nud_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .ok_or_else(|| parser.unexpected("expression"))?;

    let mut left = nud(parser)?;

    // While the current token binds tighter than the caller, keep extending lhs
    while parser.current_binding_power() > bp {
        let operator_bp = parser.current_binding_power();
        let led = match parser.get_led_lookup().get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => break,
        };

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Number => Ok(Expr::Number(NumberExpr {
            value: token.value,
            span: token.span,
        })),
        TokenKind::String => Ok(Expr::String(StringExpr {
            quote: token.value.chars().next().unwrap_or('\''),
            segments: token.segments,
            span: token.span,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Bool(BoolExpr {
            value: token.kind == TokenKind::True,
            span: token.span,
        })),
        TokenKind::Null => Ok(Expr::Null(NullExpr { span: token.span })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("literal"),
                found: token.describe(),
            },
            token.span.start,
        )),
    }
}

/// Identifier path, optionally followed by a call's argument list.
pub fn parse_path_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let callee = parse_ident_path(parser)?;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(Expr::Path(callee));
    }

    parser.advance();
    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
                continue;
            }

            break;
        }
    }

    parser.expect_error(TokenKind::CloseParen, "`,` or `)`")?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(callee.span.start.clone()),
        callee,
        arguments,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();
    let inner = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Paren(ParenExpr {
        span: parser.span_from(start),
        inner: Box::new(inner),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = UnaryOp::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("prefix operator"),
                found: operator_token.describe(),
            },
            operator_token.span.start.clone(),
        )
    })?;

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        span: Span {
            start: operator_token.span.start,
            end: operand.get_span().end.clone(),
        },
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = BinaryOp::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("binary operator"),
                found: operator_token.describe(),
            },
            operator_token.span.start.clone(),
        )
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// Right associative: the value is parsed at the lowest power so that
/// `a = b = 1` nests to the right.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let assignee = match left {
        Expr::Path(path) => path,
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget {
                    found: String::from(other.describe()),
                },
                other.get_span().start.clone(),
            ))
        }
    };

    let operator_token = parser.advance().clone();
    let operator = AssignOp::from_token_kind(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("assignment operator"),
                found: operator_token.describe(),
            },
            operator_token.span.start.clone(),
        )
    })?;

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: assignee.span.to(value.get_span()),
        assignee,
        operator,
        value: Box::new(value),
    }))
}

pub fn parse_conditional_expr(
    parser: &mut Parser,
    condition: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.advance();

    // Both branches stop before assignment but admit nested conditionals.
    let consequence = parse_expr(parser, BindingPower::Assignment)?;
    parser.expect(TokenKind::Colon)?;
    let alternative = parse_expr(parser, BindingPower::Assignment)?;

    Ok(Expr::Conditional(ConditionalExpr {
        span: condition.get_span().to(alternative.get_span()),
        condition: Box::new(condition),
        consequence: Box::new(consequence),
        alternative: Box::new(alternative),
    }))
}
