use crate::{
    ast::{BinaryOperator, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::core::operand_error,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::{floor_div, floor_mod, floor_mod_f64, repeat_count},
};

impl Context<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// - Two integers stay integers. `/` is floor division, `%` takes the
    ///   sign of the divisor, and overflow is an error.
    /// - An integer and a real, or two reals, compute in `f64`; `/` is true
    ///   division.
    /// - `+` concatenates two strings.
    /// - `*` repeats a string by an integer, in either operand order.
    ///
    /// Division or modulo by zero fails for every numeric category.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div` or `Mod`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `pos`: Position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use hausalang::{
    ///     ast::{BinaryOperator, Position},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pos = Position::new(1, 3);
    ///
    /// let q = Context::eval_arithmetic(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), pos);
    /// assert_eq!(q.unwrap(), Value::Integer(3));
    ///
    /// let q = Context::eval_arithmetic(BinaryOperator::Div, &Value::Real(7.0), &Value::Integer(2), pos);
    /// assert_eq!(q.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           pos: Position)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul};
        use Value::{Integer, Str};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b, pos),
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
            (Str(s), Integer(n)) | (Integer(n), Str(s)) if op == Mul => {
                repeat_string(s, *n, pos)
            },
            _ => match (left.as_real(), right.as_real()) {
                (Some(a), Some(b)) => Self::eval_real_op(op, a, b, pos),
                _ => Err(operand_error(op, left, right, pos)),
            },
        }
    }

    /// Integer arithmetic with overflow and zero-divisor checks.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, pos: Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod if b == 0 => return Err(RuntimeError::DivisionByZero { pos }),
            Div => floor_div(a, b),
            Mod => floor_mod(a, b),
            _ => return Err(operand_error(op, &Value::Integer(a), &Value::Integer(b), pos)),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { pos })
    }

    /// Real arithmetic with a zero-divisor check.
    fn eval_real_op(op: BinaryOperator, a: f64, b: f64, pos: Position) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        Ok(Value::Real(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           Div | Mod if b == 0.0 => {
                               return Err(RuntimeError::DivisionByZero { pos });
                           },
                           Div => a / b,
                           Mod => floor_mod_f64(a, b),
                           _ => {
                               return Err(operand_error(op,
                                                        &Value::Real(a),
                                                        &Value::Real(b),
                                                        pos));
                           },
                       }))
    }
}

/// Repeats `s` `count` times; a negative count gives the empty string.
fn repeat_string(s: &str, count: i64, pos: Position) -> EvalResult<Value> {
    let count = repeat_count(count).ok_or(RuntimeError::Overflow { pos })?;
    if s.len().checked_mul(count).is_none() {
        return Err(RuntimeError::Overflow { pos });
    }
    Ok(Value::Str(s.repeat(count)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const POS: Position = Position::new(4, 11);

    fn arith(op: BinaryOperator, left: impl Into<Value>, right: impl Into<Value>) -> EvalResult<Value> {
        Context::eval_arithmetic(op, &left.into(), &right.into(), POS)
    }

    #[test]
    fn integer_division_floors() {
        assert_eq!(arith(BinaryOperator::Div, 7_i64, 2_i64), Ok(Value::Integer(3)));
        assert_eq!(arith(BinaryOperator::Div, -7_i64, 2_i64), Ok(Value::Integer(-4)));
    }

    #[test]
    fn mixed_operands_compute_in_real() {
        assert_eq!(arith(BinaryOperator::Div, 7.0, 2_i64), Ok(Value::Real(3.5)));
        assert_eq!(arith(BinaryOperator::Add, 1_i64, 0.5), Ok(Value::Real(1.5)));
        assert_eq!(arith(BinaryOperator::Mul, 2.0, 2.0), Ok(Value::Real(4.0)));
    }

    #[test]
    fn modulo_takes_divisor_sign() {
        assert_eq!(arith(BinaryOperator::Mod, -7_i64, 3_i64), Ok(Value::Integer(2)));
        assert_eq!(arith(BinaryOperator::Mod, 7.5, 2_i64), Ok(Value::Real(1.5)));
    }

    #[test]
    fn zero_divisor_is_an_error() {
        for (left, right) in [(Value::Integer(1), Value::Integer(0)),
                              (Value::Real(1.0), Value::Integer(0)),
                              (Value::Integer(1), Value::Real(0.0))]
        {
            assert_eq!(arith(BinaryOperator::Div, left.clone(), right.clone()),
                       Err(RuntimeError::DivisionByZero { pos: POS }));
            assert_eq!(arith(BinaryOperator::Mod, left, right),
                       Err(RuntimeError::DivisionByZero { pos: POS }));
        }
    }

    #[test]
    fn integer_overflow_is_an_error() {
        assert_eq!(arith(BinaryOperator::Add, i64::MAX, 1_i64),
                   Err(RuntimeError::Overflow { pos: POS }));
        assert_eq!(arith(BinaryOperator::Mul, i64::MIN, -1_i64),
                   Err(RuntimeError::Overflow { pos: POS }));
        assert_eq!(arith(BinaryOperator::Div, i64::MIN, -1_i64),
                   Err(RuntimeError::Overflow { pos: POS }));
    }

    #[test]
    fn string_concatenation_and_repetition() {
        assert_eq!(arith(BinaryOperator::Add, "sannu ", "duniya"), Ok(Value::from("sannu duniya")));
        assert_eq!(arith(BinaryOperator::Mul, "ab", 3_i64), Ok(Value::from("ababab")));
        assert_eq!(arith(BinaryOperator::Mul, 2_i64, "-"), Ok(Value::from("--")));
        assert_eq!(arith(BinaryOperator::Mul, "ab", -1_i64), Ok(Value::from("")));
    }

    #[test]
    fn booleans_have_no_arithmetic() {
        assert!(matches!(arith(BinaryOperator::Add, true, false),
                         Err(RuntimeError::UnsupportedOperator { operand: "boolean", .. })));
        assert!(matches!(arith(BinaryOperator::Add, true, 1_i64),
                         Err(RuntimeError::TypeMismatch { .. })));
    }
}
