//! Token construction shorthands shared by the lexer and the parser's
//! sign-splitting pass.

/// Builds a `Token`. Pass string segments as a fourth argument for string
/// literals; every other kind gets none.
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Dash, String::from("-"), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            segments: Vec::new(),
        }
    };
    ($kind:expr, $value:expr, $span:expr, $segments:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            segments: $segments,
        }
    };
}

/// Pattern handler for operators and punctuation whose text never varies:
/// pushes `$value` as a token of `$kind` and steps over it.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            lexer.push_text($kind, $value);
            Ok(())
        }
    };
}
