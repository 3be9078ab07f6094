use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Arithmetic operators go to `eval_arithmetic`; equality and ordering
    /// operators go to `eval_comparison`. Both operands are already
    /// evaluated, left first.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Position of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use hausalang::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 9);
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), pos);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let less = Context::eval_binary(BinaryOperator::Less, &Value::Real(2.5), &Value::Integer(3), pos);
    /// assert_eq!(less.unwrap(), Value::Bool(true));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       pos: Position)
                       -> EvalResult<Value> {
        if op.is_comparison() {
            Self::eval_comparison(op, left, right, pos)
        } else {
            Self::eval_arithmetic(op, left, right, pos)
        }
    }
}

/// Builds the error for an operator that has no rule for its operands.
///
/// Operands of the same type that lack the operator (`"a" - "b"`) give
/// `UnsupportedOperator`; operands of different types with no mixed rule
/// (`"a" + 1`) give `TypeMismatch`.
pub(super) fn operand_error(op: BinaryOperator,
                            left: &Value,
                            right: &Value,
                            pos: Position)
                            -> RuntimeError {
    if left.type_name() == right.type_name() {
        return RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                   operand: left.type_name(),
                                                   pos };
    }
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 pos }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const POS: Position = Position::new(1, 3);

    #[test]
    fn same_type_without_rule_is_unsupported() {
        assert_eq!(Context::eval_binary(BinaryOperator::Sub,
                                        &Value::from("a"),
                                        &Value::from("b"),
                                        POS),
                   Err(RuntimeError::UnsupportedOperator { op:      "-".to_string(),
                                                           operand: "string",
                                                           pos:     POS, }));
    }

    #[test]
    fn different_types_without_rule_mismatch() {
        assert_eq!(Context::eval_binary(BinaryOperator::Add,
                                        &Value::from("a"),
                                        &Value::Integer(1),
                                        POS),
                   Err(RuntimeError::TypeMismatch { details: "cannot apply '+' to string and integer".to_string(),
                                                    pos:     POS, }));
    }
}
