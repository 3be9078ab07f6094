use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` applies to integers and reals only. Negating `i64::MIN`
    /// overflows.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `pos`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use hausalang::{
    ///     ast::{Position, UnaryOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 1);
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), pos).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let err = Context::eval_unary(UnaryOperator::Negate, &Value::from("a"), pos);
    /// assert!(err.is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, pos: Position) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { pos }),
                Value::Real(r) => Ok(Value::Real(-r)),
                other => Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                                 operand: other.type_name(),
                                                                 pos }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const POS: Position = Position::new(2, 7);

    #[test]
    fn negates_numbers() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(-4), POS),
                   Ok(Value::Integer(4)));
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Real(1.5), POS),
                   Ok(Value::Real(-1.5)));
    }

    #[test]
    fn negating_the_smallest_integer_overflows() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(i64::MIN), POS),
                   Err(RuntimeError::Overflow { pos: POS }));
    }

    #[test]
    fn negating_a_string_is_unsupported() {
        assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::from("x"), POS),
                   Err(RuntimeError::UnsupportedOperator { op:      "-".to_string(),
                                                           operand: "string",
                                                           pos:     POS, }));
    }
}
