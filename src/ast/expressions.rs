use std::fmt::Display;

use crate::{
    lexer::tokens::{StringSegment, TokenKind},
    Span,
};

use super::{ast::Expr, types::IdentPath};

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    LessEqual,
    Less,
    ShiftLeft,
    ShiftRight,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Or => BinaryOp::Or,
            TokenKind::And => BinaryOp::And,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Ampersand => BinaryOp::BitAnd,
            TokenKind::Equals => BinaryOp::Equal,
            TokenKind::NotEquals => BinaryOp::NotEqual,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::GreaterEquals => BinaryOp::GreaterEqual,
            TokenKind::LessEquals => BinaryOp::LessEqual,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::ShiftLeft => BinaryOp::ShiftLeft,
            TokenKind::ShiftRight => BinaryOp::ShiftRight,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Dash => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Rem,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Less => "<",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    BitNot,
    Neg,
    Plus,
}

impl UnaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::Dash => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Plus,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    MulAssign,
    DivAssign,
    RemAssign,
    AddAssign,
    SubAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    BitAndAssign,
    BitXorAssign,
    BitOrAssign,
}

impl AssignOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Assignment => AssignOp::Assign,
            TokenKind::StarEquals => AssignOp::MulAssign,
            TokenKind::SlashEquals => AssignOp::DivAssign,
            TokenKind::PercentEquals => AssignOp::RemAssign,
            TokenKind::PlusEquals => AssignOp::AddAssign,
            TokenKind::MinusEquals => AssignOp::SubAssign,
            TokenKind::ShiftLeftEquals => AssignOp::ShiftLeftAssign,
            TokenKind::ShiftRightEquals => AssignOp::ShiftRightAssign,
            TokenKind::AmpersandEquals => AssignOp::BitAndAssign,
            TokenKind::CaretEquals => AssignOp::BitXorAssign,
            TokenKind::PipeEquals => AssignOp::BitOrAssign,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::RemAssign => "%=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::ShiftLeftAssign => "<<=",
            AssignOp::ShiftRightAssign => ">>=",
            AssignOp::BitAndAssign => "&=",
            AssignOp::BitXorAssign => "^=",
            AssignOp::BitOrAssign => "|=",
        }
    }
}

macro_rules! display_as_str {
    ($($op:ty),*) => {
        $(impl Display for $op {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        })*
    };
}

display_as_str!(BinaryOp, UnaryOp, AssignOp);

// LITERALS

/// Number Expression
/// The literal's source text, without any sign. Base, suffix and exponent
/// are left for later stages to interpret.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: String,
    pub span: Span,
}

/// String Expression
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub quote: char,
    pub segments: Vec<StringSegment>,
    pub span: Span,
}

impl StringExpr {
    /// The decoded contents, or `None` if an escape names no valid char.
    pub fn value(&self) -> Option<String> {
        let mut value = String::new();
        for segment in &self.segments {
            match segment {
                StringSegment::Text(text) => value.push_str(text),
                StringSegment::Escape(escape) => value.push(escape.decode()?),
            }
        }
        Some(value)
    }

    /// The contents exactly as written between the quotes.
    pub fn raw(&self) -> String {
        self.segments.iter().map(StringSegment::raw).collect()
    }
}

#[derive(Debug, Clone)]
pub struct BoolExpr {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct NullExpr {
    pub span: Span,
}

// COMPOUND

/// Binary Expression
/// Represents a binary operation in the AST.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Unary Expression
/// A prefix operator applied to one operand.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// Conditional Expression
/// `condition ? consequence : alternative`
#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub consequence: Box<Expr>,
    pub alternative: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// Only identifier paths are callable.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: IdentPath,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Assignment Expression
/// Only identifier paths are assignable.
#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub assignee: IdentPath,
    pub operator: AssignOp,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}
