use std::cmp::Ordering;

use crate::{
    ast::{BinaryOperator, Position},
    interpreter::{
        evaluator::{
            binary::core::operand_error,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any pair of values: integers and reals compare
    /// numerically, and values of otherwise different types are simply
    /// unequal. The ordering operators accept two numbers or two strings;
    /// strings compare lexicographically.
    ///
    /// A comparison involving a NaN real is `False`, except `!=`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `pos`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// A `Value::Bool`.
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           pos: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => values_equal(left, right),
            NotEqual => !values_equal(left, right),
            Less | Greater | LessEqual | GreaterEqual => {
                let ordering = compare(left, right).ok_or_else(|| {
                                                      operand_error(op, left, right, pos)
                                                  })?;
                match op {
                    Less => ordering == Some(Ordering::Less),
                    Greater => ordering == Some(Ordering::Greater),
                    LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
                    _ => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
                }
            },
            _ => return Err(operand_error(op, left, right, pos)),
        };

        Ok(Value::Bool(result))
    }
}

/// Structural equality with numeric promotion between integers and reals.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::None, Value::None) => true,
        _ => match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        },
    }
}

/// Orders two values when an ordering rule applies to their types.
///
/// The outer `Option` is `None` when the types cannot be ordered; the inner
/// one is `None` when a NaN is involved.
fn compare(left: &Value, right: &Value) -> Option<Option<Ordering>> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(Some(a.cmp(b))),
        (Value::Str(a), Value::Str(b)) => Some(Some(a.cmp(b))),
        _ => match (left.as_real(), right.as_real()) {
            (Some(a), Some(b)) => Some(a.partial_cmp(&b)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::RuntimeError;

    const POS: Position = Position::new(1, 5);

    fn cmp(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Context::eval_comparison(op, &left, &right, POS)
    }

    #[test]
    fn integers_and_reals_compare_numerically() {
        assert_eq!(cmp(BinaryOperator::Equal, Value::Integer(2), Value::Real(2.0)),
                   Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::Less, Value::Integer(2), Value::Real(2.5)),
                   Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::GreaterEqual, Value::Real(3.0), Value::Integer(3)),
                   Ok(Value::Bool(true)));
    }

    #[test]
    fn different_types_are_unequal() {
        assert_eq!(cmp(BinaryOperator::Equal, Value::from("1"), Value::Integer(1)),
                   Ok(Value::Bool(false)));
        assert_eq!(cmp(BinaryOperator::NotEqual, Value::None, Value::Bool(false)),
                   Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::Equal, Value::None, Value::None),
                   Ok(Value::Bool(true)));
    }

    #[test]
    fn strings_order_lexicographically() {
        assert_eq!(cmp(BinaryOperator::Less, Value::from("abc"), Value::from("abd")),
                   Ok(Value::Bool(true)));
        assert_eq!(cmp(BinaryOperator::Greater, Value::from("b"), Value::from("abc")),
                   Ok(Value::Bool(true)));
    }

    #[test]
    fn ordering_needs_compatible_types() {
        assert!(matches!(cmp(BinaryOperator::Less, Value::from("a"), Value::Integer(1)),
                         Err(RuntimeError::TypeMismatch { .. })));
        assert!(matches!(cmp(BinaryOperator::Less, Value::None, Value::None),
                         Err(RuntimeError::UnsupportedOperator { operand: "none", .. })));
    }

    #[test]
    fn nan_orders_as_false() {
        assert_eq!(cmp(BinaryOperator::LessEqual, Value::Real(f64::NAN), Value::Integer(1)),
                   Ok(Value::Bool(false)));
        assert_eq!(cmp(BinaryOperator::NotEqual, Value::Real(f64::NAN), Value::Real(f64::NAN)),
                   Ok(Value::Bool(true)));
    }
}
