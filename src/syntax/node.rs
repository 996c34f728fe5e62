use derive_getters::Getters;
use std::fmt;

use super::grammar::{self, CHAR, EXPR, QEXPR, REGEX, ROOT, SEXPR};


/// Concrete syntax tree node.
///
/// Tags are "|"-joined rule names (e.g. "expr|number|regex"); contents are
/// the matched text for terminals and empty for non-terminals.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct SyntaxNode {
    tag: String,
    contents: String,
    children: Vec<SyntaxNode>,
}


impl SyntaxNode {
    pub fn new<T: Into<String>, C: Into<String>>(
        tag: T,
        contents: C,
        children: Vec<SyntaxNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children,
        }
    }

    pub fn leaf<T: Into<String>, C: Into<String>>(tag: T, contents: C) -> Self {
        Self::new(tag, contents, vec![])
    }

    /// Root of the start rule; children are appended by the parser.
    pub fn root() -> Self {
        Self::new(ROOT, "", vec![Self::anchor()])
    }

    /// Zero-width regex match (/^/ or /$/).
    pub fn anchor() -> Self {
        Self::leaf(REGEX, "")
    }

    pub fn delimiter(c: char) -> Self {
        Self::leaf(CHAR, c.to_string())
    }

    /// Opened list, holding only its opening delimiter so far.
    pub fn open_list(rule: &str, open: char) -> Self {
        Self::new(
            grammar::tag(&[EXPR, rule, ROOT]),
            "",
            vec![Self::delimiter(open)],
        )
    }

    pub fn push_child(&mut self, child: SyntaxNode) {
        self.children.push(child);
    }

    /// Whether rule is one of the "|"-separated names in this node's tag.
    pub fn has_rule(&self, rule: &str) -> bool {
        self.tag.split('|').any(|r| r == rule)
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT
    }

    pub fn is_sexpr(&self) -> bool {
        self.has_rule(SEXPR)
    }

    pub fn is_qexpr(&self) -> bool {
        self.has_rule(QEXPR)
    }
}


impl fmt::Display for SyntaxNode {
    /// Indented tree dump, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(
            f: &mut fmt::Formatter<'_>,
            node: &SyntaxNode,
            depth: usize,
        ) -> fmt::Result {
            write!(f, "{}{}", "  ".repeat(depth), node.tag)?;
            if !node.contents.is_empty() {
                write!(f, " '{}'", node.contents)?;
            }
            writeln!(f)?;
            for child in &node.children {
                write_node(f, child, depth + 1)?;
            }
            Ok(())
        }

        write_node(f, self, 0)
    }
}
