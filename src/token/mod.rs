// Public exports.
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_stream;

// Private mods.
mod tokenizer;

/// Name under which interactive input is reported in error locations.
pub const INPUT_NAME: &str = "<stdin>";
