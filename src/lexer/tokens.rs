use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("external", TokenKind::External);
        map.insert("fn", TokenKind::Fn);
        map.insert("mod", TokenKind::Mod);
        map.insert("type", TokenKind::Type);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("do", TokenKind::Do);
        map.insert("end", TokenKind::End);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("void", TokenKind::Void);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    /// A single character no pattern recognises. Rejected by the parser.
    Unknown,

    OpenParen,
    CloseParen,

    Assignment,       // =
    StarEquals,       // *=
    SlashEquals,      // /=
    PercentEquals,    // %=
    PlusEquals,       // +=
    MinusEquals,      // -=
    ShiftLeftEquals,  // <<=
    ShiftRightEquals, // >>=
    AmpersandEquals,  // &=
    CaretEquals,      // ^=
    PipeEquals,       // |=

    Equals,    // ==
    NotEquals, // !=
    Not,       // !
    Tilde,     // ~

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,

    Or,  // ||
    And, // &&
    Pipe,
    Caret,
    Ampersand,

    Dot,
    Ellipsis,
    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Let,
    External,
    Fn,
    Mod,
    Type,
    While,
    If,
    Else,
    Return,
    Do,
    End,
    True,
    False,
    Null,
    Void,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl TokenKind {
    /// Fixed source text of keyword, operator and punctuation tokens.
    pub fn spelling(&self) -> Option<&'static str> {
        Some(match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::StarEquals => "*=",
            TokenKind::SlashEquals => "/=",
            TokenKind::PercentEquals => "%=",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::ShiftLeftEquals => "<<=",
            TokenKind::ShiftRightEquals => ">>=",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::CaretEquals => "^=",
            TokenKind::PipeEquals => "|=",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Not => "!",
            TokenKind::Tilde => "~",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::ShiftLeft => "<<",
            TokenKind::ShiftRight => ">>",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Ampersand => "&",
            TokenKind::Dot => ".",
            TokenKind::Ellipsis => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::Arrow => "->",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            TokenKind::Let => "let",
            TokenKind::External => "external",
            TokenKind::Fn => "fn",
            TokenKind::Mod => "mod",
            TokenKind::Type => "type",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::Do => "do",
            TokenKind::End => "end",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Void => "void",
            TokenKind::EOF
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::Unknown => return None,
        })
    }

    /// How the kind is named when a parser expects it.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::EOF => String::from("end of input"),
            TokenKind::Number => String::from("number literal"),
            TokenKind::String => String::from("string literal"),
            TokenKind::Identifier => String::from("identifier"),
            other => match other.spelling() {
                Some(spelling) => format!("`{}`", spelling),
                None => format!("{:?}", other),
            },
        }
    }
}

/// One escape sequence inside a string literal, stored as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeSequence {
    /// `\` followed by any single character other than `x`, `u` or `U`.
    Char(char),
    /// `\` followed by two or three digits.
    Octal(String),
    /// `\x` followed by two or more hex digits.
    Hex(String),
    /// `\u` + 4 or `\U` + 8 hex digits. The digits include the marker letter.
    Unicode(String),
}

impl EscapeSequence {
    /// The exact source text of the escape, backslash included.
    pub fn raw(&self) -> String {
        match self {
            EscapeSequence::Char(ch) => format!("\\{}", ch),
            EscapeSequence::Octal(digits) => format!("\\{}", digits),
            EscapeSequence::Hex(digits) => format!("\\x{}", digits),
            EscapeSequence::Unicode(digits) => format!("\\{}", digits),
        }
    }

    /// Decodes the escape into a char.
    ///
    /// Returns `None` when the digits do not name a valid code point, for
    /// example `\89` or an overlong `\x` run.
    pub fn decode(&self) -> Option<char> {
        match self {
            EscapeSequence::Char(ch) => Some(match ch {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '0' => '\0',
                'a' => '\u{07}',
                'b' => '\u{08}',
                'f' => '\u{0c}',
                'v' => '\u{0b}',
                other => *other,
            }),
            EscapeSequence::Octal(digits) => {
                char::from_u32(u32::from_str_radix(digits, 8).ok()?)
            }
            EscapeSequence::Hex(digits) => char::from_u32(u32::from_str_radix(digits, 16).ok()?),
            EscapeSequence::Unicode(digits) => {
                char::from_u32(u32::from_str_radix(&digits[1..], 16).ok()?)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringSegment {
    Text(String),
    Escape(EscapeSequence),
}

impl StringSegment {
    pub fn raw(&self) -> String {
        match self {
            StringSegment::Text(text) => text.clone(),
            StringSegment::Escape(escape) => escape.raw(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token. Empty for `EOF`.
    pub value: String,
    pub span: Span,
    /// Content of a string literal, split into text runs and escapes.
    pub segments: Vec<StringSegment>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Human-readable description used in "found ..." error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EOF => String::from("end of input"),
            TokenKind::Number => format!("number `{}`", self.value),
            TokenKind::String => format!("string {}", self.value),
            TokenKind::Identifier => format!("identifier `{}`", self.value),
            _ => format!("`{}`", self.value),
        }
    }
}
