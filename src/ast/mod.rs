/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression and statement enums and the program root
/// - expressions: Expression node structs and operator enums
/// - statements: Statement node structs and blocks
/// - types: Identifier paths, type annotations and parameter lists
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
