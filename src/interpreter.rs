//! Module for reducing Values.
//!
//! Evaluation recurses once per level of S-expression nesting. There is no
//! depth guard here: a Value tree deep enough to exhaust the call stack
//! (only constructible programmatically, since the parser bounds nesting)
//! aborts the process.

use log::{debug, trace};

use crate::builtins;
use crate::error::Error;
use crate::parser::parse_str;
use crate::reader::read;
use crate::value::{ExprList, LangError, Value};


/// Evaluates value, consuming it.
///
/// Anything other than an S-expression (including Q-expressions) evaluates
/// to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(list) => eval_sexpr(list),
        other => other,
    }
}

fn eval_sexpr(mut list: ExprList) -> Value {
    trace!("Evaluating s-expression of {} element(s)", list.len());

    list.replace_each(eval);

    // First error, left to right, wins.
    if let Some(pos) = list.iter().position(Value::is_error) {
        return list.take(pos);
    }

    match list.len() {
        0 => return Value::Sexpr(list),
        1 => return list.take(0),
        _ => {}
    }

    match list.remove_at(0) {
        Value::Symbol(op) => builtins::apply(&op, list),
        _ => LangError::NotSymbol.into(),
    }
}

/// Parses, reads and evaluates input.
///
/// Only front-end (tokenize/parse) failures are returned as Err; evaluation
/// failures are Ok(Value::Error(..)).
pub fn interpret<S: AsRef<str>>(input: S) -> Result<Value, Error> {
    let tree = parse_str(input)?;
    let result = eval(read(&tree));
    debug!("Result: {}", result);
    Ok(result)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
