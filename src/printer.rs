//! Colored terminal rendering of Values.
//!
//! Produces the same text as Value's Display, with list delimiters colored by
//! nesting depth and errors highlighted.

use colored::*;
use log::warn;
use std::io::{self, stdout, BufWriter, Write};

use crate::value::Value;


pub fn print_value(value: &Value) {
    let mut writer = BufWriter::new(stdout());
    if let Err(err) = write_colored(&mut writer, value).and_then(|_| writer.flush()) {
        warn!("print_value error: {:?}", err);
    }
}

pub fn write_colored<W: Write>(w: &mut W, value: &Value) -> io::Result<()> {
    fn delim_color(depth: usize) -> (u8, u8, u8) {
        match depth % 6 {
            0 => (0, 255, 204),
            1 => (204, 51, 0),
            2 => (153, 255, 102),
            3 => (153, 102, 255),
            4 => (255, 255, 102),
            _ => (255, 179, 179),
        }
    }

    value.write_value(
        w,
        0,
        &mut |writer, atom, _depth| match atom {
            Value::Error(err) => write!(writer, "{}", format!("Error: {}", err).red().bold()),
            _ => atom.write_atom(writer),
        },
        &mut |writer, delim, depth| {
            let (r, g, b) = delim_color(depth);
            write!(writer, "{}", delim.truecolor(r, g, b))
        },
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::value::{LangError, ToSymbol};
    use crate::{qexpr, sexpr};

    fn plain(value: &Value) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_colored(&mut out, value).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn matches_display_without_color() {
        let value = sexpr![
            "+".to_symbol(),
            qexpr![1i64, sexpr![]],
            LangError::DivisionByZero
        ];
        assert_eq!(plain(&value), value.to_string());
        assert_eq!(plain(&value), "(+ {1 ()} Error: division by zero)");
    }
}
