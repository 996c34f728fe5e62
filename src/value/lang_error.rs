use std::fmt;

use crate::error::ErrorKind;


/// Evaluation-time failure, carried through reduction as Value::Error.
#[derive(Clone, Debug, PartialEq)]
pub enum LangError {
    InvalidNumber,
    NonNumber,
    DifferentTypes,
    DivisionByZero,
    IntegerOverflow,
    NotSymbol,
    MalformedSyntaxTree,
    BadOperator,
    WrongArgumentCount {
        given: usize,
        expected: ExpectedCount,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpectedCount {
    AtLeast(usize),
}


impl ErrorKind for LangError {
    fn category(&self) -> &'static str {
        match self {
            Self::InvalidNumber => "InvalidNumber",
            Self::NonNumber | Self::DifferentTypes => "TypeMismatch",
            Self::DivisionByZero => "DivisionByZero",
            Self::IntegerOverflow => "Overflow",
            Self::NotSymbol | Self::MalformedSyntaxTree => "MalformedExpression",
            Self::BadOperator => "UnknownOperator",
            Self::WrongArgumentCount { .. } => "ArgumentCount",
        }
    }
}

impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber => write!(f, "invalid number"),
            Self::NonNumber => write!(f, "cannot operate on non-number"),
            Self::DifferentTypes => write!(f, "different types of operands"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::NotSymbol => write!(f, "s-expression does not start with symbol"),
            Self::MalformedSyntaxTree => write!(f, "malformed syntax tree"),
            Self::BadOperator => write!(f, "bad operator"),
            Self::WrongArgumentCount { given, expected } => write!(
                f,
                "wrong argument count: given {}, expected {}",
                given, expected
            ),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}
