use super::*;


#[test]
fn constructors() {
    assert_eq!(Value::number(-7), Value::Number(-7));
    assert_eq!(Value::error("bad"), Value::Error("bad".to_string()));
    assert_eq!(Value::symbol("+"), Value::Symbol(Symbol::new("+")));
    assert_eq!(Value::list(), Value::List(List::new()));
}

#[test]
fn leaves() {
    assert!(Value::number(1).is_leaf());
    assert!(Value::error("e").is_leaf());
    assert!(Value::symbol("*").is_leaf());
    assert!(!Value::list().is_leaf());

    assert!(Value::error("e").is_error());
    assert!(!Value::number(0).is_error());
}

#[test]
fn vec_into_value() {
    let value = Value::from(vec![Value::symbol("+"), Value::number(1), Value::number(2)]);
    let list = <&List>::try_from(&value).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(1), Some(&Value::number(1)));
}

#[test]
fn try_from_returns_ownership() {
    let value = Value::symbol("x");
    let back = i64::try_from(value).unwrap_err();
    assert_eq!(back, Value::symbol("x"));

    let symbol = Symbol::try_from(back).unwrap();
    assert_eq!(symbol.as_str(), "x");
}
