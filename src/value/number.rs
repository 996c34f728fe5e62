//! Representation of tlisp numbers.

use std::convert::TryFrom;
use std::{fmt, str};

use self::Number::*;
use super::{LangError, Value};


/// A number whose kind (Integer or Float) is fixed at construction.
///
/// Arithmetic never promotes between kinds; combining an Integer with a Float
/// is a LangError::DifferentTypes.
#[derive(Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}


// Generates Number::checked_* methods, each of which checks kinds, then
// (if divisive) checks for a zero operand, then combines.
macro_rules! generate_checked_ops {
    (
        $($name:ident : $int_op:ident, $float_op:tt, divisive = $divisive:expr;)+
    ) => {
        impl Number {
            $(
                pub fn $name(self, other: Self) -> Result<Self, LangError> {
                    match (self, other) {
                        (Integer(this), Integer(that)) => {
                            if $divisive && that == 0 {
                                return Err(LangError::DivisionByZero);
                            }
                            this.$int_op(that)
                                .map(Integer)
                                .ok_or(LangError::IntegerOverflow)
                        }
                        (Float(this), Float(that)) => {
                            if $divisive && that == 0.0 {
                                return Err(LangError::DivisionByZero);
                            }
                            Ok(Float(this $float_op that))
                        }
                        _ => Err(LangError::DifferentTypes),
                    }
                }
            )+
        }
    };
}

generate_checked_ops!(
    checked_add: checked_add, +, divisive = false;
    checked_sub: checked_sub, -, divisive = false;
    checked_mul: checked_mul, *, divisive = false;
    checked_div: checked_div, /, divisive = true;
    checked_rem: checked_rem, %, divisive = true;
);

impl Number {
    /// Flips the sign of whichever representation is populated.
    pub fn checked_neg(self) -> Result<Self, LangError> {
        match self {
            Integer(val) => val
                .checked_neg()
                .map(Integer)
                .ok_or(LangError::IntegerOverflow),
            Float(val) => Ok(Float(-val)),
        }
    }
}


/// Literals containing a decimal point are Floats; all others are Integers.
impl str::FromStr for Number {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('.') {
            match s.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Float(f)),
                _ => Err(LangError::InvalidNumber),
            }
        } else {
            s.parse::<i64>()
                .map(Integer)
                .map_err(|_| LangError::InvalidNumber)
        }
    }
}


impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(val) => write!(f, "{}", val),
            Float(val) => {
                // Keep the kind visible for integral floats.
                if val.is_finite() && val.fract() == 0.0 {
                    write!(f, "{:.1}", val)
                } else {
                    write!(f, "{}", val)
                }
            }
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Integer(val) => write!(f, "{}i64", val),
            Float(val) => write!(f, "{}f64", val),
        }
    }
}


impl From<i64> for Number {
    fn from(val: i64) -> Self {
        Integer(val)
    }
}

impl From<f64> for Number {
    fn from(val: f64) -> Self {
        Float(val)
    }
}

impl TryFrom<Value> for Number {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Number(num) = value {
            Ok(num)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
#[path = "./number_test.rs"]
mod number_test;
