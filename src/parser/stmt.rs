use crate::{
    ast::{
        ast::Stmt,
        statements::{
            BlockStmt, EmptyStmt, ExpressionStmt, ExternalItem, ExternalStmt, FnDeclStmt, IfStmt,
            ModDeclStmt, ReturnStmt, TypeAliasStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{
    parser::Parser,
    types::{parse_fn_signature, parse_type, parse_typed_ident},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        tracing::trace!("statement `{}` at {}", kind, parser.get_position());
        return handler(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        expression,
    }))
}

/// Parses `do`, statements up to `end`, then `end`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.descend()?;
    let block = parse_block_body(parser);
    parser.ascend();
    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::Do)?.span.start;
    let mut body = vec![];

    while parser.current_token_kind() != TokenKind::End {
        if !parser.has_tokens() {
            return Err(parser.unexpected("`end`"));
        }

        body.push(parse_stmt(parser)?);
    }

    parser.advance();

    Ok(BlockStmt {
        span: parser.span_from(start),
        body,
    })
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let span = parser.advance().span.clone();

    Ok(Stmt::Empty(EmptyStmt { span }))
}

pub fn parse_mod_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let name = parser.expect(TokenKind::Identifier)?.value;

    Ok(Stmt::Mod(ModDeclStmt {
        span: parser.span_from(start),
        name,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let target = parse_typed_ident(parser)?;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        span: parser.span_from(start),
        target,
        value,
    }))
}

pub fn parse_external_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let item = if parser.current_token_kind() == TokenKind::Fn {
        let fn_start = parser.advance().span.start.clone();
        ExternalItem::Function(parse_fn_signature(parser, fn_start)?)
    } else {
        ExternalItem::Variable(parse_typed_ident(parser)?)
    };

    Ok(Stmt::External(ExternalStmt {
        span: parser.span_from(start),
        item,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let signature = parse_fn_signature(parser, start.clone())?;
    let body = parse_block(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        span: parser.span_from(start),
        signature,
        body,
    }))
}

pub fn parse_type_alias_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.expect(TokenKind::Identifier)?.value;
    parser.expect(TokenKind::Assignment)?;
    let aliased = parse_type(parser)?;

    Ok(Stmt::TypeAlias(TypeAliasStmt {
        span: parser.span_from(start),
        name,
        aliased,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt {
        span: parser.span_from(start),
        condition,
        body,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        span: parser.span_from(start),
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Return(ReturnStmt {
        span: parser.span_from(start),
        value,
    }))
}
