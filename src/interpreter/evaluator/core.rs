use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{Expr, Position, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Interpreter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// How many function calls may be active at once before a call fails
    /// with [`RuntimeError::RecursionLimit`].
    pub max_call_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// How a statement finished.
///
/// `Return` carries the value of a `mayar` statement outward through any
/// enclosing `idan`, `kadai` and `don` blocks until the function call that
/// owns it unwraps it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `mayar` statement ran inside a function call.
    Return(Value),
}

/// Stores the runtime evaluation context.
///
/// The context owns everything about a run except the bindings: the output
/// sink that `rubuta` writes to, the interpreter options, and the current
/// call depth. Bindings live in [`Environment`]s passed alongside, so a
/// single context serves the global scope and every call frame.
pub struct Context<'w> {
    out:     &'w mut dyn Write,
    options: InterpreterOptions,
    depth:   usize,
}

impl<'w> Context<'w> {
    /// Creates a context that prints to `out`.
    #[must_use]
    pub fn new(out: &'w mut dyn Write, options: InterpreterOptions) -> Self {
        Self { out,
               options,
               depth: 0 }
    }

    /// Executes every top-level statement of `program` in `env`.
    ///
    /// # Errors
    /// The first `RuntimeError` raised; statements after it do not run.
    pub fn run(&mut self, program: &Program, env: &mut Environment<'_>) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "interpreting program");
        for statement in &program.statements {
            self.eval_statement(statement, env)?;
        }
        Ok(())
    }

    /// Executes a block of statements in order.
    ///
    /// Stops at the first statement that yields [`Flow::Return`] and passes
    /// it on.
    pub fn eval_block(&mut self,
                      statements: &[Statement],
                      env: &mut Environment<'_>)
                      -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = self.eval_statement(statement, env)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// Assignments and function definitions write into `env` only, never
    /// into a parent scope. Conditions of `idan` and `kadai` go through
    /// [`Value::is_truthy`].
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `env`: The current scope.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `mayar` ran inside a function call, otherwise
    /// [`Flow::Normal`].
    pub fn eval_statement(&mut self,
                          statement: &Statement,
                          env: &mut Environment<'_>)
                          -> EvalResult<Flow> {
        ensure_sufficient_stack(|| match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.set(name, value);
                Ok(Flow::Normal)
            },
            Statement::Print { expr, pos } => {
                let value = self.eval(expr, env)?;
                self.print(&value, *pos)?;
                Ok(Flow::Normal)
            },
            Statement::Return { expr, .. } => {
                let value = self.eval(expr, env)?;
                // Outside any call there is nothing to return to.
                if self.depth == 0 {
                    return Ok(Flow::Normal);
                }
                Ok(Flow::Return(value))
            },
            Statement::If { condition,
                            then_body,
                            else_body,
                            .. } => {
                if self.eval(condition, env)?.is_truthy() {
                    self.eval_block(then_body, env)
                } else if let Some(else_body) = else_body {
                    self.eval_block(else_body, env)
                } else {
                    Ok(Flow::Normal)
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition, env)?.is_truthy() {
                    if let Flow::Return(value) = self.eval_block(body, env)? {
                        return Ok(Flow::Return(value));
                    }
                }
                Ok(Flow::Normal)
            },
            Statement::For(for_loop) => self.eval_for(for_loop, env),
            Statement::FunctionDef(def) => {
                env.define_function(Rc::clone(def));
                Ok(Flow::Normal)
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr, env)?;
                Ok(Flow::Normal)
            },
        })
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right; a binary operation evaluates both sides
    /// before applying the operator.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The scope that identifiers and calls resolve in.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr, env: &Environment<'_>) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::Identifier { name, pos } => {
                env.get(name)
                   .cloned()
                   .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                    pos:  *pos, })
            },
            Expr::UnaryOp { op, expr, pos } => {
                let operand = self.eval(expr, env)?;
                Self::eval_unary(*op, &operand, *pos)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             pos, } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Self::eval_binary(*op, &left, &right, *pos)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 pos, } => self.eval_function_call(name, arguments, *pos, env),
        })
    }

    /// Writes the printed form of `value` to the output sink, without a
    /// trailing newline.
    fn print(&mut self, value: &Value, pos: Position) -> EvalResult<()> {
        write!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                       pos })
    }

    /// The active interpreter options.
    #[must_use]
    pub const fn options(&self) -> InterpreterOptions {
        self.options
    }

    /// The number of function calls currently active.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Marks entry into a function call.
    pub(crate) const fn enter_call(&mut self) {
        self.depth += 1;
    }

    /// Marks exit from a function call.
    pub(crate) const fn leave_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
