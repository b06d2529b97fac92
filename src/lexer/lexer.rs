use std::{iter::Peekable, rc::Rc, str::CharIndices};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, DEFAULT_SOURCE_NAME, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{EscapeSequence, StringSegment, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

const DECIMAL_DIGITS: &str = r"[0-9]+(?:'[0-9]+)*";
const HEX_DIGITS: &str = r"[0-9a-fA-F]+(?:'[0-9a-fA-F]+)*";

fn number_pattern() -> String {
    format!(
        r"^[-+]?(?:0x{hex}(?:\.(?:{hex})?)?|0b{dec}|{dec}(?:\.(?:{dec})?)?|\.{dec})(?:[eEpP](?:[-+]?{hex})?)?[uUlLfF]*",
        hex = HEX_DIGITS,
        dec = DECIMAL_DIGITS
    )
}

// Patterns are tried in order and the first match wins, so longer operators
// come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^//(?:\\(?:\r?\n|.)|[^\\\n])*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^/\*").unwrap(), handler: unterminated_comment_handler },
        RegexPattern { regex: Regex::new(r#"^["']"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(&number_pattern()).unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^\.\.\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ellipsis, "...") },
        RegexPattern { regex: Regex::new(r"^->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
        RegexPattern { regex: Regex::new(r"^<<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeftEquals, "<<=") },
        RegexPattern { regex: Regex::new(r"^>>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRightEquals, ">>=") },
        RegexPattern { regex: Regex::new(r"^<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft, "<<") },
        RegexPattern { regex: Regex::new(r"^>>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRight, ">>") },
        RegexPattern { regex: Regex::new(r"^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new(r"^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new(r"^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new(r"^\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new(r"^\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
        RegexPattern { regex: Regex::new(r"^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
        RegexPattern { regex: Regex::new(r"^%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
        RegexPattern { regex: Regex::new(r"^\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
        RegexPattern { regex: Regex::new(r"^-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
        RegexPattern { regex: Regex::new(r"^&=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AmpersandEquals, "&=") },
        RegexPattern { regex: Regex::new(r"^\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CaretEquals, "^=") },
        RegexPattern { regex: Regex::new(r"^\|=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PipeEquals, "|=") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(r"^\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(r"^\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new(r"^~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
        RegexPattern { regex: Regex::new(r"^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
        RegexPattern { regex: Regex::new(r"^\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
        RegexPattern { regex: Regex::new(r"^\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_NAME)));

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        Position {
            offset: self.pos as u32,
            line: self.line,
            column: self.column,
            file: Rc::clone(&self.file),
        }
    }

    /// Position `n` bytes past the current one, without consuming anything.
    pub fn position_after(&self, n: usize) -> Position {
        let (line, column) = self.track(n);
        Position {
            offset: (self.pos + n) as u32,
            line,
            column,
            file: Rc::clone(&self.file),
        }
    }

    fn track(&self, n: usize) -> (u32, u32) {
        let (mut line, mut column) = (self.line, self.column);
        for ch in self.source[self.pos..self.pos + n].chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    pub fn advance_n(&mut self, n: usize) {
        let (line, column) = self.track(n);
        self.line = line;
        self.column = column;
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Pushes a token spanning `text`, which must be the upcoming source, and
    /// consumes it.
    pub fn push_text(&mut self, kind: TokenKind, text: &str) {
        let start = self.position();
        self.advance_n(text.len());
        let end = self.position();
        self.push(MK_TOKEN!(kind, String::from(text), Span { start, end }));
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| String::from(m.as_str()))
            .unwrap_or_default()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
    Ok(())
}

fn unterminated_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, lexer.position()))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    lexer.push_text(TokenKind::Number, &matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push_text(kind, &value);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let (length, segments) = match scan_string(lexer.remainder()) {
        Ok(scanned) => scanned,
        Err((offset, error)) => return Err(Error::new(error, lexer.position_after(offset))),
    };

    let start = lexer.position();
    let value = String::from(&lexer.remainder()[..length]);
    lexer.advance_n(length);

    lexer.push(MK_TOKEN!(
        TokenKind::String,
        value,
        Span { start, end: lexer.position() },
        segments
    ));
    Ok(())
}

/// Scans one quoted literal at the start of `text`.
///
/// Returns the byte length of the literal (quotes included) and its content
/// segments. On failure returns the byte offset the error is reported at.
fn scan_string(text: &str) -> Result<(usize, Vec<StringSegment>), (usize, ErrorImpl)> {
    let mut chars = text.char_indices().peekable();
    let quote = match chars.next() {
        Some((_, quote)) => quote,
        None => return Err((0, ErrorImpl::UnterminatedString)),
    };

    let mut segments = vec![];
    let mut run = String::new();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '\n' => return Err((0, ErrorImpl::UnterminatedString)),
            '\\' => {
                if !run.is_empty() {
                    segments.push(StringSegment::Text(std::mem::take(&mut run)));
                }
                // Running out of input mid-escape is still reported at the quote.
                let escape = scan_escape(&mut chars).map_err(|error| match error {
                    ErrorImpl::UnterminatedString => (0, error),
                    error => (index, error),
                })?;
                segments.push(StringSegment::Escape(escape));
            }
            ch if ch == quote => {
                if !run.is_empty() {
                    segments.push(StringSegment::Text(run));
                }
                return Ok((index + ch.len_utf8(), segments));
            }
            ch => run.push(ch),
        }
    }

    Err((0, ErrorImpl::UnterminatedString))
}

fn take_digits(
    chars: &mut Peekable<CharIndices>,
    max: usize,
    accept: fn(&char) -> bool,
) -> String {
    let mut digits = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        if digits.len() >= max || !accept(&ch) {
            break;
        }
        digits.push(ch);
        chars.next();
    }
    digits
}

fn scan_escape(chars: &mut Peekable<CharIndices>) -> Result<EscapeSequence, ErrorImpl> {
    match chars.next() {
        None => Err(ErrorImpl::UnterminatedString),
        Some((_, 'x')) => {
            let digits = take_digits(chars, usize::MAX, char::is_ascii_hexdigit);
            if digits.len() < 2 {
                return Err(ErrorImpl::IllegalEscape {
                    sequence: format!("\\x{}", digits),
                });
            }
            Ok(EscapeSequence::Hex(digits))
        }
        Some((_, marker @ ('u' | 'U'))) => {
            let width = if marker == 'u' { 4 } else { 8 };
            let digits = take_digits(chars, width, char::is_ascii_hexdigit);
            if digits.len() < width {
                return Err(ErrorImpl::IllegalEscape {
                    sequence: format!("\\{}{}", marker, digits),
                });
            }
            Ok(EscapeSequence::Unicode(format!("{}{}", marker, digits)))
        }
        Some((_, first)) if first.is_ascii_digit() => {
            let rest = take_digits(chars, 2, char::is_ascii_digit);
            if rest.is_empty() {
                Ok(EscapeSequence::Char(first))
            } else {
                Ok(EscapeSequence::Octal(format!("{}{}", first, rest)))
            }
        }
        Some((_, ch)) => Ok(EscapeSequence::Char(ch)),
    }
}

/// Converts source text into tokens, ending with a single `EOF` token.
///
/// Whitespace and comments are dropped. Characters no pattern recognises
/// become `Unknown` tokens so the parser can report them in context.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(lex.remainder()) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            if let Some(ch) = lex.at() {
                tracing::trace!("unrecognised character {:?} at {}", ch, lex.position());
                lex.push_text(TokenKind::Unknown, &ch.to_string());
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end.clone(), end }));

    tracing::debug!("tokenized {} into {} tokens", lex.file, lex.tokens.len());
    Ok(lex.tokens)
}
