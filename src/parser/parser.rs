//! Token cursor and the top-level `parse` driver.
//!
//! `Parser` owns the token stream plus four tables filled in by
//! `create_token_lookups`: statement handlers keyed on the leading token,
//! prefix (NUD) and infix (LED) expression handlers, and the binding power
//! of every infix token.

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest combined expression and block nesting accepted before the
/// parse fails instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Cursor over one token stream together with its dispatch tables.
pub struct Parser {
    /// Always ends with `EOF`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Active `parse_expr` and `parse_block` frames
    depth: usize,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Number literals that the lexer folded a sign into are split back into
    /// a `+`/`-` token followed by the unsigned literal. Whether that sign is
    /// a prefix or an infix operator is then decided by parser state alone:
    /// in operand position it is unary, after an operand it is binary. This
    /// keeps `-1 + 2`, `n-1` and `1 - -2` on a single code path.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut tokens = split_signed_literals(tokens);

        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position::start(file));
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::new(),
                Span { start: end.clone(), end }
            ));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Token under the cursor.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes the current token and returns it. The cursor stops at `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Builds an "expected ..., found ..." error at the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from(expected),
                found: token.describe(),
            },
            token.span.start.clone(),
        )
    }

    /// Expects a token of the specified kind, naming what was expected on
    /// failure.
    pub fn expect_error(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance().clone())
    }

    /// Expects a token of the specified kind with the default description.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, &expected_kind.describe())
    }

    /// False once only `EOF` remains.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Binding power of the current token; `Default` for tokens that do not
    /// continue an expression.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current_token_kind())
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers an infix handler and the power it binds with.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a prefix handler. Binding powers are left untouched.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Enters one level of nesting, failing past `MAX_NESTING_DEPTH`.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the end of the most recently consumed token.
    pub fn last_end(&self) -> Position {
        match self.pos.checked_sub(1) {
            Some(previous) => self.tokens[previous].span.end.clone(),
            None => self.get_position(),
        }
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.last_end(),
        }
    }
}

fn split_signed_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut split = Vec::with_capacity(tokens.len());

    for token in tokens {
        let sign = match (token.kind, token.value.chars().next()) {
            (TokenKind::Number, Some('-')) => TokenKind::Dash,
            (TokenKind::Number, Some('+')) => TokenKind::Plus,
            _ => {
                split.push(token);
                continue;
            }
        };

        let start = token.span.start;
        let middle = Position {
            offset: start.offset + 1,
            line: start.line,
            column: start.column + 1,
            file: Rc::clone(&start.file),
        };

        split.push(MK_TOKEN!(
            sign,
            String::from(&token.value[..1]),
            Span { start, end: middle.clone() }
        ));
        split.push(MK_TOKEN!(
            TokenKind::Number,
            String::from(&token.value[1..]),
            Span { start: middle, end: token.span.end }
        ));
    }

    split
}

/// Parses top-level statements until `EOF`. The first error aborts the
/// parse and no partial program is returned.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    tracing::debug!("parsed {} top-level statements from {}", body.len(), file);

    Ok(Program::new(
        body,
        Span {
            start: Position::start(file),
            end: parser.get_position(),
        },
    ))
}
