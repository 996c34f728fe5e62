//! Representation of values.

pub mod expr_list;
pub mod lang_error;
pub mod number;
pub mod symbol;
pub mod value;

mod fmt_io_adapter;


pub use expr_list::ExprList;
pub use lang_error::{ExpectedCount, LangError};
pub use number::Number;
pub use symbol::{Symbol, ToSymbol};
pub use value::Value;


/// Builds a Value::Sexpr from elements convertible into Value.
#[macro_export]
macro_rules! sexpr {
    ($($elem:expr),* $(,)?) => {
        $crate::value::Value::sexpr(vec![$($crate::value::Value::from($elem)),*])
    };
}

/// Builds a Value::Qexpr from elements convertible into Value.
#[macro_export]
macro_rules! qexpr {
    ($($elem:expr),* $(,)?) => {
        $crate::value::Value::qexpr(vec![$($crate::value::Value::from($elem)),*])
    };
}
