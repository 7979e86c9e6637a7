//! Builtin arithmetic operators.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::value::{List, Symbol, Value};


pub const NON_NUMBER: &str = "Cannot operate on a non-number!";
pub const DIVISION_BY_ZERO: &str = "Division by zero is not supported";
pub const OVERFLOW: &str = "Integer overflow";
pub const NO_OPERANDS: &str = "No operands given";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }

    /// Folds y into acc; Err holds the message of the resulting Error value.
    fn apply(self, acc: i64, y: i64) -> Result<i64, &'static str> {
        let result = match self {
            Operator::Add => acc.checked_add(y),
            Operator::Sub => acc.checked_sub(y),
            Operator::Mul => acc.checked_mul(y),
            Operator::Div => {
                if y == 0 {
                    return Err(DIVISION_BY_ZERO);
                }
                acc.checked_div(y)
            }
        };
        result.ok_or(OVERFLOW)
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or(())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// Applies the operator named by op to operands, left to right.
///
/// Every operand must be a Number; that is checked before the operator name is
/// looked up. A lone operand to `-` is negated. The
/// first failing step (division by zero, overflow) is the whole result; no
/// partial accumulator escapes and remaining operands are dropped unread.
pub fn apply_operator(operands: List, op: &Symbol) -> Value {
    if operands.iter().any(|v| v.as_number().is_none()) {
        return Value::error(NON_NUMBER);
    }
    let operator = match op.as_str().parse::<Operator>() {
        Ok(operator) => operator,
        Err(()) => return Value::error(format!("Unknown operator: {}", op)),
    };
    debug!("Applying {} to {} operand(s)", operator, operands.len());

    let mut numbers = operands.into_iter().filter_map(Value::into_number).peekable();
    let mut acc = match numbers.next() {
        Some(num) => num,
        None => return Value::error(NO_OPERANDS),
    };

    if operator == Operator::Sub && numbers.peek().is_none() {
        return match acc.checked_neg() {
            Some(neg) => Value::number(neg),
            None => Value::error(OVERFLOW),
        };
    }

    for y in numbers {
        acc = match operator.apply(acc, y) {
            Ok(num) => num,
            Err(message) => return Value::error(message),
        };
    }
    Value::number(acc)
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
