//! The fixed tlisp grammar and the rule names that tag syntax-tree nodes.

/// Grammar description, in the notation of a parser-combinator front end.
pub const GRAMMAR: &str = r"
    number : /-?[0-9]+(\.[0-9]+)?/ ;
    symbol : '+' | '-' | '*' | '/' | '%' ;
    sexpr  : '(' <expr>* ')' ;
    qexpr  : '{' <expr>* '}' ;
    expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
    lispy  : /^/ <expr>* /$/ ;
";

// Rule names.
pub const NUMBER: &str = "number";
pub const SYMBOL: &str = "symbol";
pub const SEXPR: &str = "sexpr";
pub const QEXPR: &str = "qexpr";
pub const EXPR: &str = "expr";

// Terminal kinds.
pub const REGEX: &str = "regex";
pub const CHAR: &str = "char";

/// Tag of the start rule's node, and suffix of every non-terminal tag.
pub const ROOT: &str = ">";

/// Symbols accepted by the symbol rule.
pub const OPERATORS: [&str; 5] = ["+", "-", "*", "/", "%"];

/// Joins rule names into a node tag.
pub fn tag(rules: &[&str]) -> String {
    rules.join("|")
}
