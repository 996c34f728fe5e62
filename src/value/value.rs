//! Module for representing tlisp values.

use std::fmt;
use std::io::{self, Write};

use super::expr_list::ExprList;
use super::fmt_io_adapter::FmtIoAdapter;
use super::lang_error::LangError;
use super::number::Number;
use super::symbol::Symbol;


/// A node of the owned value tree.
///
/// The tree is acyclic and unshared: every Value is owned by exactly one
/// parent list or by whoever is evaluating it.
#[derive(Clone, PartialEq)]
pub enum Value {
    Error(LangError),
    Number(Number),
    Symbol(Symbol),
    /// Evaluable list: operator first, operands after.
    Sexpr(ExprList),
    /// Inert list literal; never reduced.
    Qexpr(ExprList),
}


impl Value {
    pub fn sexpr<I: IntoIterator<Item = Value>>(elements: I) -> Self {
        Value::Sexpr(elements.into_iter().collect())
    }

    pub fn qexpr<I: IntoIterator<Item = Value>>(elements: I) -> Self {
        Value::Qexpr(elements.into_iter().collect())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Error(_) => "error",
            Value::Number(Number::Integer(_)) => "integer",
            Value::Number(Number::Float(_)) => "float",
            Value::Symbol(_) => "symbol",
            Value::Sexpr(_) => "s-expression",
            Value::Qexpr(_) => "q-expression",
        }
    }

    /// Writes self, delegating atoms and list delimiters to the provided
    /// closures. Elements are separated by single spaces.
    pub fn write_value<W, A, D>(
        &self,
        w: &mut W,
        depth: usize,
        write_atom: &mut A,
        write_delim: &mut D,
    ) -> io::Result<()>
    where
        W: Write,
        A: FnMut(&mut W, &Value, usize) -> io::Result<()>,
        D: FnMut(&mut W, &str, usize) -> io::Result<()>,
    {
        let (open, close, elements) = match self {
            Value::Sexpr(list) => ("(", ")", list),
            Value::Qexpr(list) => ("{", "}", list),
            _ => return write_atom(w, self, depth),
        };

        write_delim(w, open, depth)?;
        for (i, elem) in elements.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            elem.write_value(w, depth + 1, write_atom, write_delim)?;
        }
        write_delim(w, close, depth)
    }

    /// Plain rendering of a non-list Value. Lists write nothing.
    pub fn write_atom<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Value::Error(err) => write!(w, "Error: {}", err),
            Value::Number(num) => write!(w, "{}", num),
            Value::Symbol(symbol) => write!(w, "{}", symbol),
            Value::Sexpr(_) | Value::Qexpr(_) => Ok(()),
        }
    }
}


/// Empty S-expression; used as the placeholder while an element is moved out
/// of its list.
impl Default for Value {
    fn default() -> Self {
        Value::Sexpr(ExprList::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_value(
            &mut FmtIoAdapter::new(f),
            0,
            &mut |writer, atom, _depth| atom.write_atom(writer),
            &mut |writer, delim, _depth| write!(writer, "{}", delim),
        )
        .map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}


impl From<LangError> for Value {
    fn from(err: LangError) -> Self {
        Value::Error(err)
    }
}

impl From<Number> for Value {
    fn from(num: Number) -> Self {
        Value::Number(num)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Number(Number::Integer(val))
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Number(Number::Float(val))
    }
}

impl<T: Into<Value>, E: Into<Value>> From<Result<T, E>> for Value {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(val) => val.into(),
            Err(err) => err.into(),
        }
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
