//! Printers over the syntax tree.
//!
//! - source: canonical source form, re-parseable to the same tree
//! - sexp: span-free S-expression form used to compare tree shapes

pub mod sexp;
pub mod source;
