//! Interactive S-expression arithmetic evaluator.
//!
//! Input flows through tokenizer, parser, reader and interpreter:
//! ```
//! use tlisp::value::Value;
//!
//! let result = tlisp::interpret("(+ 1 (* 2 3))").unwrap();
//! assert_eq!(result, Value::from(7i64));
//! ```

#[macro_use]
pub mod value;

pub mod builtins;
pub mod error;
pub mod interpreter;
pub mod parser;
pub mod printer;
pub mod reader;
pub mod syntax;
pub mod token;

pub use builtins::apply;
pub use interpreter::{eval, interpret};
pub use parser::parse_str;
pub use reader::read;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::syntax::SyntaxNode;
    pub use crate::value::{ExprList, LangError, Number, Symbol, ToSymbol, Value};
    pub use crate::{apply, eval, interpret, parse_str, read};
    // Macros.
    pub use crate::{qexpr, sexpr};
}
