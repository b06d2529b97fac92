use crate::Span;

/// Identifier Path
/// A dot-separated sequence of identifiers such as `a.b.c`.
///
/// Used both as an expression and as a type name. Always has at least one
/// segment.
#[derive(Debug, Clone)]
pub struct IdentPath {
    segments: Vec<String>,
    pub span: Span,
}

impl IdentPath {
    pub fn new(first: String, span: Span) -> Self {
        IdentPath {
            segments: vec![first],
            span,
        }
    }

    /// Appends a segment and extends the span to `end`.
    pub fn push(&mut self, segment: String, end: &Span) {
        self.segments.push(segment);
        self.span = self.span.to(end);
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

/// Pointer Type
/// One level of indirection over a named type: `*u8`.
#[derive(Debug, Clone)]
pub struct PointerType {
    pub target: IdentPath,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypeExpr {
    Pointer(PointerType),
    Path(IdentPath),
}

impl TypeExpr {
    pub fn get_span(&self) -> &Span {
        match self {
            TypeExpr::Pointer(pointer) => &pointer.span,
            TypeExpr::Path(path) => &path.span,
        }
    }
}

/// Typed Identifier
/// A name with an optional type annotation: `n: i32`, `fmt: *u8`, `x`.
#[derive(Debug, Clone)]
pub struct TypedIdent {
    pub name: String,
    pub annotation: Option<TypeExpr>,
    pub span: Span,
}

/// Parameter list of a function definition or external function.
#[derive(Debug, Clone)]
pub enum Parameters {
    /// `()` or `(void)`.
    Empty,
    /// `(...)`, any number of untyped arguments.
    Variadic,
    /// One or more typed parameters, optionally followed by `...`.
    List {
        fixed: Vec<TypedIdent>,
        variadic: bool,
    },
}

impl Parameters {
    pub fn fixed(&self) -> &[TypedIdent] {
        match self {
            Parameters::List { fixed, .. } => fixed,
            _ => &[],
        }
    }

    pub fn is_variadic(&self) -> bool {
        match self {
            Parameters::Empty => false,
            Parameters::Variadic => true,
            Parameters::List { variadic, .. } => *variadic,
        }
    }
}

/// Function Signature
/// Name, parameters and return type shared by `fn` definitions and
/// `external fn` declarations.
#[derive(Debug, Clone)]
pub struct FnSignature {
    pub name: String,
    pub parameters: Parameters,
    pub return_type: IdentPath,
    pub span: Span,
}
