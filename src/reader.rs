//! Module for reading a concrete syntax tree into a Value tree.

use log::trace;

use crate::syntax::grammar::{NUMBER, REGEX, SYMBOL};
use crate::syntax::SyntaxNode;
use crate::value::{ExprList, LangError, Number, Symbol, Value};


/// Converts node (and its descendants) into an owned Value.
///
/// The root and s-expression nodes become Sexprs; q-expression nodes become
/// Qexprs. Delimiter and anchor children carry no meaning and are skipped.
pub fn read(node: &SyntaxNode) -> Value {
    if node.has_rule(NUMBER) {
        return read_number(node.contents());
    }
    if node.has_rule(SYMBOL) {
        return Symbol::new(node.contents()).into();
    }

    if node.is_root() || node.is_sexpr() {
        Value::Sexpr(read_children(node))
    } else if node.is_qexpr() {
        Value::Qexpr(read_children(node))
    } else {
        trace!("Unreadable node: {:?}", node);
        LangError::MalformedSyntaxTree.into()
    }
}

fn read_number(contents: &str) -> Value {
    contents.parse::<Number>().into()
}

fn read_children(node: &SyntaxNode) -> ExprList {
    let mut list = ExprList::new();
    for child in node.children() {
        if is_delimiter(child) || child.tag() == REGEX {
            continue;
        }
        list.append(read(child));
    }
    list
}

fn is_delimiter(node: &SyntaxNode) -> bool {
    matches!(node.contents().as_str(), "(" | ")" | "{" | "}")
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
