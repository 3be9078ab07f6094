use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

impl Context<'_> {
    /// Evaluates a call to a user-defined function.
    ///
    /// The steps are, in order:
    /// 1. evaluate every argument left to right in the caller's scope,
    /// 2. look the function up through the caller's scope chain,
    /// 3. check the argument count against the parameter count exactly,
    /// 4. check the call depth against the configured limit,
    /// 5. bind each parameter in a new scope whose parent is the caller's
    ///    scope, and run the body there.
    ///
    /// A `mayar` anywhere in the body, however deeply nested in blocks, ends
    /// the call with its value; a body that finishes without one yields
    /// [`Value::None`].
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `pos`: Position of the call, for error reporting.
    /// - `env`: The caller's scope.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no scope in the chain defines `name`.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - `RecursionLimit` if the call would exceed the maximum depth.
    /// - Any error raised by an argument or by the body.
    #[tracing::instrument(level = "trace", skip(self, arguments, env))]
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              pos: Position,
                              env: &Environment<'_>)
                              -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg, env))
                                .collect::<EvalResult<Vec<_>>>()?;

        let func = env.function(name)
                      .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                       pos })?;

        if arg_vals.len() != func.params.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: func.params.len(),
                                                     found: arg_vals.len(),
                                                     pos });
        }

        let limit = self.options().max_call_depth;
        if self.depth() >= limit {
            return Err(RuntimeError::RecursionLimit { limit, pos });
        }

        let mut local = env.child();
        for (param, value) in func.params.iter().zip(arg_vals) {
            local.set(param, value);
        }

        self.enter_call();
        let flow = ensure_sufficient_stack(|| self.eval_block(&func.body, &mut local));
        self.leave_call();

        match flow? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{FunctionDef, LiteralValue, Statement},
        interpreter::evaluator::core::InterpreterOptions,
    };

    const POS: Position = Position::new(1, 1);

    fn literal(value: i64) -> Expr {
        Expr::Literal { value: LiteralValue::Integer(value),
                        pos:   POS, }
    }

    fn identity() -> Rc<FunctionDef> {
        Rc::new(FunctionDef { name:   "komo".to_string(),
                              params: vec!["x".to_string()],
                              body:   vec![Statement::Return { expr: Expr::Identifier { name: "x".to_string(),
                                                                                        pos:  POS, },
                                                               pos:  POS, }],
                              pos:    POS, })
    }

    #[test]
    fn call_returns_the_value_of_mayar() {
        let mut out = Vec::new();
        let mut context = Context::new(&mut out, InterpreterOptions::default());
        let mut env = Environment::new();
        env.define_function(identity());

        let value = context.eval_function_call("komo", &[literal(9)], POS, &env);

        assert_eq!(value, Ok(Value::Integer(9)));
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn parameters_do_not_leak_into_the_caller() {
        let mut out = Vec::new();
        let mut context = Context::new(&mut out, InterpreterOptions::default());
        let mut env = Environment::new();
        env.define_function(identity());

        context.eval_function_call("komo", &[literal(1)], POS, &env).unwrap();

        assert_eq!(env.get("x"), None);
    }

    #[test]
    fn wrong_argument_count_is_arity_mismatch() {
        let mut out = Vec::new();
        let mut context = Context::new(&mut out, InterpreterOptions::default());
        let mut env = Environment::new();
        env.define_function(identity());

        assert_eq!(context.eval_function_call("komo", &[], POS, &env),
                   Err(RuntimeError::ArityMismatch { name:     "komo".to_string(),
                                                     expected: 1,
                                                     found:    0,
                                                     pos:      POS, }));
    }

    #[test]
    fn unknown_function_is_reported() {
        let mut out = Vec::new();
        let mut context = Context::new(&mut out, InterpreterOptions::default());
        let env = Environment::new();

        assert_eq!(context.eval_function_call("babu", &[], POS, &env),
                   Err(RuntimeError::UndefinedFunction { name: "babu".to_string(),
                                                         pos:  POS, }));
    }

    #[test]
    fn zero_call_depth_rejects_every_call() {
        let mut out = Vec::new();
        let mut context = Context::new(&mut out, InterpreterOptions { max_call_depth: 0 });
        let mut env = Environment::new();
        env.define_function(identity());

        assert_eq!(context.eval_function_call("komo", &[literal(1)], POS, &env),
                   Err(RuntimeError::RecursionLimit { limit: 0,
                                                      pos:   POS, }));
    }
}
