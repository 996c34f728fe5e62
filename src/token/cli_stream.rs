use log::warn;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use crate::error::Error;
use crate::parser::parse_str;
use crate::syntax::SyntaxNode;


pub const PROMPT: &str = "tlisp> ";

/// Interactive source of syntax trees, one per line read.
///
/// Every line is recorded in the editor's history. Iteration ends on ^C, ^D,
/// or an unrecoverable terminal error.
pub struct CliStream {
    editor: Editor<CliHelper>,
}

impl CliStream {
    pub fn new() -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        CliStream { editor }
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new()
    }
}


impl Iterator for CliStream {
    type Item = Result<SyntaxNode, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str());
                Some(parse_str(&line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                None
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                None
            }
            Err(err) => {
                warn!("[Readline Error]: {:?}", err);
                None
            }
        }
    }
}
