use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding powers, weakest first.
///
/// An infix operator keeps extending the left operand while its power is
/// strictly greater than the power the caller is parsing at.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Assignment
    for kind in [
        TokenKind::Assignment,
        TokenKind::StarEquals,
        TokenKind::SlashEquals,
        TokenKind::PercentEquals,
        TokenKind::PlusEquals,
        TokenKind::MinusEquals,
        TokenKind::ShiftLeftEquals,
        TokenKind::ShiftRightEquals,
        TokenKind::AmpersandEquals,
        TokenKind::CaretEquals,
        TokenKind::PipeEquals,
    ] {
        parser.led(kind, BindingPower::Assignment, parse_assignment_expr);
    }

    parser.led(TokenKind::Question, BindingPower::Conditional, parse_conditional_expr);

    // Logical and bitwise
    parser.led(TokenKind::Or, BindingPower::LogicalOr, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, parse_binary_expr);
    parser.led(TokenKind::Pipe, BindingPower::BitwiseOr, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::BitwiseXor, parse_binary_expr);
    parser.led(TokenKind::Ampersand, BindingPower::BitwiseAnd, parse_binary_expr);

    // Equality and relational
    parser.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);

    parser.led(TokenKind::ShiftLeft, BindingPower::Shift, parse_binary_expr);
    parser.led(TokenKind::ShiftRight, BindingPower::Shift, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Prefix operators
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Plus, parse_prefix_expr);

    // Literals, paths and calls
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::String, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Null, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_path_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Semicolon, parse_empty_stmt);
    parser.stmt(TokenKind::Mod, parse_mod_stmt);
    parser.stmt(TokenKind::Let, parse_var_decl_stmt);
    parser.stmt(TokenKind::External, parse_external_stmt);
    parser.stmt(TokenKind::Fn, parse_fn_decl_stmt);
    parser.stmt(TokenKind::Type, parse_type_alias_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
