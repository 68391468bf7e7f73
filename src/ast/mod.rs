/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program and block containers
/// - expressions: The expression node set
/// - statements: The statement node set
pub mod ast;
pub mod expressions;
pub mod statements;
