use tlisp::error::Error;
use tlisp::value::Value;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn results(lines: &[&str]) -> Vec<Result<Value, Error>> {
    setup();
    lines.iter().map(|line| tlisp::interpret(line)).collect()
}

pub fn result<S: AsRef<str>>(line: S) -> Value {
    setup();
    tlisp::interpret(line).unwrap()
}
