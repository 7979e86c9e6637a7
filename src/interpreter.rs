//! Reduction of Values to results.

use std::convert::TryFrom;

use log::debug;

use crate::builtins;
use crate::value::{List, Symbol, Value};


pub const NOT_SYMBOL: &str = "S-expression does not start with symbol";


/// Evaluates a Value. Everything but a List evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::List(list) => eval_list(list),
        other => other,
    }
}

/// Evaluates every element, then reduces the List.
///
/// The leftmost Error among the evaluated elements is the result. An empty
/// List evaluates to itself and a single-element List to its element.
/// Otherwise the head must be a Symbol naming a builtin, which is applied to
/// the remaining elements.
pub fn eval_list(mut list: List) -> Value {
    debug!("Evaluating: {}", list);
    list.map_in_place(eval);

    if let Some(i) = list.iter().position(Value::is_error) {
        return list.take_at(i);
    }

    match list.len() {
        0 => return list.into(),
        1 => return list.take_at(0),
        _ => {}
    }

    let head = list.remove_at(0);
    let symbol = match Symbol::try_from(head) {
        Ok(symbol) => symbol,
        Err(_) => return Value::error(NOT_SYMBOL),
    };
    builtins::apply_operator(list, &symbol)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
