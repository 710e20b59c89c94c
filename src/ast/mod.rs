/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Shared operator/relation kinds and the type-assertion step
/// - expressions: Expression and condition nodes with their constructors
/// - statements: Statement nodes with their constructors
///
/// Constructors perform type resolution inline: once a node exists it
/// is well-typed, and the executor only branches on the recorded type
/// discriminants.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
