//! Parsing of the non-expression building blocks.
//!
//! This module handles identifier paths, type annotations and the pieces
//! shared by `fn` definitions and `external fn` declarations:
//!
//! - Identifier paths (`a.b.c`)
//! - Types, either a path or a single pointer level (`*u8`)
//! - Typed identifiers (`n: i32`)
//! - Parameter lists, including the empty and variadic markers
//! - Function signatures
//!
//! Type positions additionally accept `void` as a path segment.

use crate::{
    ast::types::{FnSignature, IdentPath, Parameters, PointerType, TypeExpr, TypedIdent},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Position,
};

use super::parser::Parser;

fn parse_path(parser: &mut Parser, allow_void: bool) -> Result<IdentPath, Error> {
    let expected = if allow_void { "type name" } else { "identifier" };

    let segment = |parser: &mut Parser| match parser.current_token_kind() {
        TokenKind::Identifier => Ok(parser.advance().clone()),
        TokenKind::Void if allow_void => Ok(parser.advance().clone()),
        _ => Err(parser.unexpected(expected)),
    };

    let first = segment(parser)?;
    let mut path = IdentPath::new(first.value, first.span);

    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        let next = segment(parser)?;
        path.push(next.value, &next.span);
    }

    Ok(path)
}

/// Parses a dot-separated identifier path. At least one segment is required.
pub fn parse_ident_path(parser: &mut Parser) -> Result<IdentPath, Error> {
    parse_path(parser, false)
}

/// Like [`parse_ident_path`] but also accepts the `void` type marker.
pub fn parse_type_path(parser: &mut Parser) -> Result<IdentPath, Error> {
    parse_path(parser, true)
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeExpr, Error> {
    if parser.current_token_kind() != TokenKind::Star {
        return Ok(TypeExpr::Path(parse_type_path(parser)?));
    }

    let start = parser.advance().span.start.clone();
    let target = parse_type_path(parser)?;

    Ok(TypeExpr::Pointer(PointerType {
        span: parser.span_from(start),
        target,
    }))
}

pub fn parse_typed_ident(parser: &mut Parser) -> Result<TypedIdent, Error> {
    let name = parser.expect(TokenKind::Identifier)?;

    let annotation = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser)?)
    } else {
        None
    };

    Ok(TypedIdent {
        span: parser.span_from(name.span.start),
        name: name.value,
        annotation,
    })
}

fn malformed(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::MalformedParameters {
            found: parser.current_token().describe(),
        },
        parser.get_position(),
    )
}

/// Parses a parenthesized parameter list.
///
/// Accepts `()`, `(void)`, `(...)` or one or more typed identifiers with an
/// optional trailing `, ...`. A `...` anywhere else is malformed.
pub fn parse_parameters(parser: &mut Parser) -> Result<Parameters, Error> {
    parser.expect(TokenKind::OpenParen)?;

    match parser.current_token_kind() {
        TokenKind::CloseParen => {
            parser.advance();
            return Ok(Parameters::Empty);
        }
        TokenKind::Void => {
            parser.advance();
            parser.expect(TokenKind::CloseParen)?;
            return Ok(Parameters::Empty);
        }
        TokenKind::Ellipsis => {
            parser.advance();
            if parser.current_token_kind() != TokenKind::CloseParen {
                return Err(malformed(parser));
            }
            parser.advance();
            return Ok(Parameters::Variadic);
        }
        _ => {}
    }

    let mut fixed = vec![];
    let mut variadic = false;

    loop {
        fixed.push(parse_typed_ident(parser)?);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();

        if parser.current_token_kind() == TokenKind::Ellipsis {
            parser.advance();
            if parser.current_token_kind() != TokenKind::CloseParen {
                return Err(malformed(parser));
            }
            variadic = true;
            break;
        }
    }

    parser.expect_error(TokenKind::CloseParen, "`,` or `)`")?;

    Ok(Parameters::List { fixed, variadic })
}

/// Parses `name(params) -> type` after the introducing `fn`, which starts at
/// `start`.
pub fn parse_fn_signature(parser: &mut Parser, start: Position) -> Result<FnSignature, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value;
    let parameters = parse_parameters(parser)?;
    parser.expect(TokenKind::Arrow)?;
    let return_type = parse_type_path(parser)?;

    Ok(FnSignature {
        span: parser.span_from(start),
        name,
        parameters,
        return_type,
    })
}
