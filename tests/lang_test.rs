mod common;

use tlisp::prelude::*;
use std::thread;

use tlisp::parser::MAX_DEPTH;
use tlisp::printer::write_colored;


#[test]
fn basic_arithmetic() {
    let results = common::results(&["(+ 1 2)", "+ 2 2", "(* (+ 1 1) 3)", "(- 10 4 3)"]);
    assert_eq!(
        results,
        vec![
            Ok(Value::from(3i64)),
            Ok(Value::from(4i64)),
            Ok(Value::from(6i64)),
            Ok(Value::from(3i64)),
        ]
    );

    assert_eq!(common::result("(/ 7 2)"), Value::from(3i64));
    assert_eq!(common::result("(% 7 3)"), Value::from(1i64));
    assert_eq!(common::result("(/ 7.0 2.0)"), Value::from(3.5));
    assert_eq!(common::result("(- 5)"), Value::from(-5i64));
    assert_eq!(common::result("(+ 5)"), Value::from(5i64));
}

#[test]
fn rendering() {
    let render = |s: &str| common::result(s).to_string();

    assert_eq!(render("(+ 1 2)"), "3");
    assert_eq!(render("(* 2.0 3.0)"), "6.0");
    assert_eq!(render("{1 2 (+ 1 2)}"), "{1 2 (+ 1 2)}");
    assert_eq!(render(""), "()");
    assert_eq!(render("()"), "()");
    assert_eq!(render("(5)"), "5");
    assert_eq!(render("-"), "-");
}

#[test]
fn qexpr_is_inert() {
    assert_eq!(
        common::result("{+ 1 {2}}"),
        qexpr!["+".to_symbol(), 1i64, qexpr![2i64]]
    );
    assert_eq!(
        common::result("(+ 1 {2})"),
        Value::from(LangError::NonNumber)
    );
}

#[test]
fn evaluation_errors() {
    let error = |s: &str| match common::result(s) {
        Value::Error(err) => err,
        other => panic!("expected error from {:?}, got {}", s, other),
    };

    assert_eq!(error("(/ 10 0)"), LangError::DivisionByZero);
    assert_eq!(error("(% 10 0)"), LangError::DivisionByZero);
    assert_eq!(error("(/ 1.0 0.0)"), LangError::DivisionByZero);
    assert_eq!(error("(+ 1 2.0)"), LangError::DifferentTypes);
    assert_eq!(error("(1 2 3)"), LangError::NotSymbol);
    assert_eq!(error("(+ 1 (/ 1 0) (1 2))"), LangError::DivisionByZero);
    assert_eq!(error("(+ 9223372036854775807 1)"), LangError::IntegerOverflow);
    assert_eq!(error("(- -9223372036854775808)"), LangError::IntegerOverflow);
    assert_eq!(error("99999999999999999999"), LangError::InvalidNumber);

    assert_eq!(
        common::result("(/ 10 0)").to_string(),
        "Error: division by zero"
    );
}

#[test]
fn errors_do_not_stop_session() {
    let results = common::results(&["(/ 1 0)", "(+ 1", "(+ 1 1)"]);
    assert_eq!(results[0], Ok(Value::from(LangError::DivisionByZero)));
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok(Value::from(2i64)));
}

#[test]
fn parse_errors() {
    common::setup();

    for input in &["(+ 1", "(+ 1))", "(+ 1}", "{1 2", "(+ 1 a)", "(+ 1 2.)"] {
        let err = interpret(input).unwrap_err();
        assert_eq!(err.category(), "ParseError", "input {:?}", input);
        assert!(
            err.to_string().starts_with("<stdin>:1:"),
            "input {:?} gave {}",
            input,
            err
        );
    }

    let deep = format!("{}{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    let err = interpret(deep).unwrap_err();
    assert_eq!(err.category(), "ParseError");
    assert_eq!(
        err.to_string(),
        format!(
            "<stdin>:1:{}: error: lists nested deeper than {}",
            MAX_DEPTH + 1,
            MAX_DEPTH
        )
    );
}

#[test]
fn nesting_up_to_max_depth() {
    common::setup();

    // Main-thread stack size of the tlisp binary.
    let result = thread::Builder::new()
        .stack_size(8 << 20)
        .spawn(|| {
            let nested = |inner: &str| {
                format!("{}{}{}", "(".repeat(MAX_DEPTH), inner, ")".repeat(MAX_DEPTH))
            };
            (
                interpret(nested("5")).map_err(|err| err.to_string()),
                interpret(nested("- 1 3")).map_err(|err| err.to_string()),
            )
        })
        .unwrap()
        .join()
        .unwrap();
    assert_eq!(result.0, Ok(Value::from(5i64)));
    assert_eq!(result.1, Ok(Value::from(-2i64)));
}

#[test]
fn pipeline_stages() {
    common::setup();

    let tree = parse_str("(+ 1 (* 2 3))").unwrap();
    assert!(tree.is_root());

    let value = read(&tree);
    assert_eq!(
        value,
        sexpr![sexpr![
            "+".to_symbol(),
            1i64,
            sexpr!["*".to_symbol(), 2i64, 3i64]
        ]]
    );
    assert_eq!(eval(value), Value::from(7i64));

    let operands: ExprList = vec![Value::from(1i64), Value::from(2i64)].into();
    assert_eq!(apply(&Symbol::new("+"), operands), Value::from(3i64));
}

#[test]
fn colored_output_matches_display() {
    common::setup();
    colored::control::set_override(false);

    let value = common::result("{(+ 1 2) {3}}");
    let mut out = Vec::new();
    write_colored(&mut out, &value).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), value.to_string());
}
