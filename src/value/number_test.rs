use super::*;


#[test]
fn parse_kinds() {
    assert_eq!("42".parse::<Number>().unwrap(), Integer(42));
    assert_eq!("-7".parse::<Number>().unwrap(), Integer(-7));
    assert_eq!("2.5".parse::<Number>().unwrap(), Float(2.5));
    assert_eq!("-0.25".parse::<Number>().unwrap(), Float(-0.25));
}

#[test]
fn parse_invalid() {
    assert_eq!(
        "99999999999999999999".parse::<Number>(),
        Err(LangError::InvalidNumber)
    );
    assert_eq!("1.2.3".parse::<Number>(), Err(LangError::InvalidNumber));
    assert_eq!("abc".parse::<Number>(), Err(LangError::InvalidNumber));
}

#[test]
fn no_promotion() {
    assert_eq!(
        Integer(1).checked_add(Float(2.5)),
        Err(LangError::DifferentTypes)
    );
    assert_eq!(
        Float(1.0).checked_mul(Integer(2)),
        Err(LangError::DifferentTypes)
    );
}

#[test]
fn kind_checked_before_zero() {
    assert_eq!(
        Integer(1).checked_div(Float(0.0)),
        Err(LangError::DifferentTypes)
    );
}

#[test]
fn division_by_zero() {
    assert_eq!(
        Integer(10).checked_div(Integer(0)),
        Err(LangError::DivisionByZero)
    );
    assert_eq!(
        Integer(10).checked_rem(Integer(0)),
        Err(LangError::DivisionByZero)
    );
    assert_eq!(
        Float(1.5).checked_div(Float(0.0)),
        Err(LangError::DivisionByZero)
    );
    assert_eq!(
        Float(1.5).checked_rem(Float(-0.0)),
        Err(LangError::DivisionByZero)
    );
}

#[test]
fn remainder() {
    assert_eq!(Integer(-7).checked_rem(Integer(3)), Ok(Integer(-1)));
    assert_eq!(Float(7.5).checked_rem(Float(2.0)), Ok(Float(1.5)));
}

#[test]
fn integer_overflow() {
    assert_eq!(
        Integer(i64::MAX).checked_add(Integer(1)),
        Err(LangError::IntegerOverflow)
    );
    assert_eq!(
        Integer(i64::MIN).checked_div(Integer(-1)),
        Err(LangError::IntegerOverflow)
    );
    assert_eq!(
        Integer(i64::MIN).checked_neg(),
        Err(LangError::IntegerOverflow)
    );
}

#[test]
fn negation() {
    assert_eq!(Integer(5).checked_neg(), Ok(Integer(-5)));
    assert_eq!(Float(2.5).checked_neg(), Ok(Float(-2.5)));
}

#[test]
fn display() {
    assert_eq!(Integer(-12).to_string(), "-12");
    assert_eq!(Float(2.5).to_string(), "2.5");
    assert_eq!(Float(6.0).to_string(), "6.0");
    assert_eq!(Float(-0.125).to_string(), "-0.125");
}
