//! Representation of errors surfaced by tlisp.
//!
//! General error mechanism that can wrap any ErrorKind. Front-end failures
//! (tokenizing, parsing, reading lines) travel as Errors through Result, while
//! evaluation failures are first-class Values (see LangError).

use dyn_clone::DynClone;
use std::fmt;


#[derive(Clone)]
pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Display + fmt::Debug + DynClone {
    /// Name of the error family this kind belongs to (e.g. "ParseError").
    fn category(&self) -> &'static str;
}


impl Error {
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.category() == other.category() && self.to_string() == other.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}", self.category(), self.kind())
    }
}

impl std::error::Error for Error {}

dyn_clone::clone_trait_object!(ErrorKind);
