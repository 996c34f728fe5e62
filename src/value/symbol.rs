use std::fmt;


/// Operator or identifier name.
///
/// Unlike the grammar's symbol terminal, Symbol itself imposes no character
/// constraints; the reader takes symbol text verbatim.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Symbol(String);

pub trait ToSymbol {
    fn to_symbol(&self) -> Symbol;
}


impl Symbol {
    pub fn new<S: AsRef<str>>(sym: S) -> Self {
        Symbol(sym.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}


impl<S: AsRef<str>> ToSymbol for S {
    fn to_symbol(&self) -> Symbol {
        Symbol::new(self)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

