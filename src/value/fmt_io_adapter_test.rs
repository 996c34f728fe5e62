use super::*;

use std::io::Write;


struct FailingWriter;

impl fmt::Write for FailingWriter {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn writes_through() {
    let mut out = String::new();
    let mut adapter = FmtIoAdapter::new(&mut out);
    write!(adapter, "({} {})", "+", 1).unwrap();
    adapter.flush().unwrap();
    assert_eq!(out, "(+ 1)");
}

#[test]
fn fmt_failure_is_other() {
    let mut sink = FailingWriter;
    let mut adapter = FmtIoAdapter::new(&mut sink);
    let err = adapter.write(b"1").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Other);
}

#[test]
fn rejects_invalid_utf8() {
    let mut out = String::new();
    let mut adapter = FmtIoAdapter::new(&mut out);
    let err = adapter.write(&[0xff, 0xfe]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(out.is_empty());
}
