use crate::{
    ast::{BinaryOperator, Direction, ForLoop},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a `don` loop.
    ///
    /// The start, end and step expressions are evaluated once, in that
    /// order, before the first iteration. The loop variable is then bound to
    /// the start value in the current scope and the loop runs as:
    ///
    /// ```text
    /// var = start
    /// kadai var < end:        (var > end for `ba`)
    ///     <body>
    ///     var = var + step    (var - step for `ba`)
    /// ```
    ///
    /// The end is exclusive. The step defaults to `1`; its sign is never
    /// inspected, only the direction word decides whether it is added or
    /// subtracted. The body may reassign the loop variable, and the update
    /// applies to whatever value it holds at the end of the body. The
    /// variable stays bound after the loop.
    ///
    /// # Parameters
    /// - `for_loop`: The loop header and body.
    /// - `env`: The current scope.
    ///
    /// # Errors
    /// - `InvalidLoopStep` if the step evaluates to zero.
    /// - Any error from the header expressions, the comparison, the update
    ///   or the body.
    pub fn eval_for(&mut self,
                    for_loop: &ForLoop,
                    env: &mut Environment<'_>)
                    -> EvalResult<Flow> {
        let start = self.eval(&for_loop.start, env)?;
        let end = self.eval(&for_loop.end, env)?;
        let step = match &for_loop.step {
            Some(expr) => self.eval(expr, env)?,
            None => Value::Integer(1),
        };

        if step.as_real() == Some(0.0) {
            return Err(RuntimeError::InvalidLoopStep { pos: for_loop.pos });
        }

        let (condition, update) = match for_loop.direction {
            Direction::Ascending => (BinaryOperator::Less, BinaryOperator::Add),
            Direction::Descending => (BinaryOperator::Greater, BinaryOperator::Sub),
        };

        env.set(&for_loop.var, start);
        loop {
            let current = loop_variable(env, for_loop)?;
            if !Self::eval_binary(condition, &current, &end, for_loop.pos)?.is_truthy() {
                break;
            }

            if let Flow::Return(value) = self.eval_block(&for_loop.body, env)? {
                return Ok(Flow::Return(value));
            }

            let current = loop_variable(env, for_loop)?;
            env.set(&for_loop.var, Self::eval_binary(update, &current, &step, for_loop.pos)?);
        }

        Ok(Flow::Normal)
    }
}

/// Reads the loop variable back from the scope.
fn loop_variable(env: &Environment<'_>, for_loop: &ForLoop) -> EvalResult<Value> {
    env.get(&for_loop.var)
       .cloned()
       .ok_or_else(|| RuntimeError::UndefinedVariable { name: for_loop.var.clone(),
                                                        pos:  for_loop.pos, })
}
