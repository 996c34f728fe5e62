//! Builtin arithmetic operators and their application to operand lists.

use lazy_static::lazy_static;
use log::trace;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

use crate::value::{ExpectedCount, ExprList, LangError, Number, Symbol, Value};


pub type BinaryFn = fn(Number, Number) -> Result<Number, LangError>;
pub type UnaryFn = fn(Number) -> Result<Number, LangError>;

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    binary: BinaryFn,
    // Applied when the operator is given exactly one operand.
    unary: Option<UnaryFn>,
}

impl BuiltIn {
    pub fn new(name: &'static str, binary: BinaryFn, unary: Option<UnaryFn>) -> BuiltIn {
        BuiltIn {
            name,
            binary,
            unary,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn call(&self, acc: Number, operand: Number) -> Result<Number, LangError> {
        (self.binary)(acc, operand)
    }

    pub fn call_unary(&self, operand: Number) -> Result<Number, LangError> {
        match self.unary {
            Some(unary) => unary(operand),
            None => Ok(operand),
        }
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


macro_rules! builtins {
    (@unary $unary:expr) => { Some($unary as UnaryFn) };
    (@unary) => { None };
    [$($name:literal : $binary:expr $(, unary = $unary:expr)?);* $(;)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert(
                    $name,
                    BuiltIn::new($name, $binary, builtins!(@unary $($unary)?)),
                );
            )*
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "+": Number::checked_add;
        "-": Number::checked_sub, unary = Number::checked_neg;
        "*": Number::checked_mul;
        "/": Number::checked_div;
        "%": Number::checked_rem;
    ];
}

pub fn lookup(name: &str) -> Option<BuiltIn> {
    BUILTINS.get(name).copied()
}


/// Applies the builtin named by op to operands, consuming them.
///
/// All operands must be Numbers of the same kind. The first operand is the
/// accumulator, into which the rest are folded left to right; with no other
/// operands, the builtin's unary form (if any) applies instead.
pub fn apply(op: &Symbol, mut operands: ExprList) -> Value {
    if let Some(operand) = operands.iter().find(|val| !val.is_number()) {
        trace!("{}: cannot apply to {}", op, operand.type_name());
        return LangError::NonNumber.into();
    }
    let builtin = match lookup(op.as_str()) {
        Some(builtin) => builtin,
        None => return LangError::BadOperator.into(),
    };
    if operands.is_empty() {
        return LangError::WrongArgumentCount {
            given: 0,
            expected: ExpectedCount::AtLeast(1),
        }
        .into();
    }
    trace!("Applying {} to {} operand(s)", builtin, operands.len());

    let mut acc = match Number::try_from(operands.remove_at(0)) {
        Ok(num) => num,
        Err(_) => return LangError::NonNumber.into(),
    };
    if operands.is_empty() {
        return builtin.call_unary(acc).into();
    }

    for operand in operands {
        let operand = match Number::try_from(operand) {
            Ok(num) => num,
            Err(_) => return LangError::NonNumber.into(),
        };
        acc = match builtin.call(acc, operand) {
            Ok(num) => num,
            Err(err) => return err.into(),
        };
    }
    acc.into()
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
