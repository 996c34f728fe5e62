use rustyline::completion::Completer;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::Helper;
use std::borrow::Cow;


// Rustyline Helper for CliStream. Highlights the delimiter matching the one
// under the cursor; no completion or hints.
pub struct CliHelper {
    brackets: MatchingBracketHighlighter,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            brackets: MatchingBracketHighlighter::new(),
        }
    }
}

impl Default for CliHelper {
    fn default() -> Self {
        Self::new()
    }
}


impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.brackets.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.brackets.highlight_char(line, pos)
    }
}

impl Helper for CliHelper {}
impl Completer for CliHelper {
    type Candidate = String;
}
impl Hinter for CliHelper {
    type Hint = String;
}
impl Validator for CliHelper {}
