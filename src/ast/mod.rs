/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the syntax tree structure
///
/// Submodules:
/// - ast: Program root and the Stmt / Expr enums
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
