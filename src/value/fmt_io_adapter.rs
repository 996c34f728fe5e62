//! Lets fmt::Write sinks (e.g. fmt::Formatter) accept io::Write output.
//!
//! Value::write_value is generic over io::Write so that the same traversal
//! can drive a terminal writer and fmt::Display alike.

use std::str::from_utf8;
use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        // fmt::Write is UTF-8 only.
        let text = from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.fmt_writer
            .write_str(text)
            .map_err(io::Error::other)?;
        Ok(text.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Nothing is buffered here.
        Ok(())
    }
}


#[cfg(test)]
#[path = "./fmt_io_adapter_test.rs"]
mod fmt_io_adapter_test;
