//! Grammar and concrete syntax tree produced by the parser.

pub mod grammar;
pub mod node;

pub use grammar::GRAMMAR;
pub use node::SyntaxNode;
