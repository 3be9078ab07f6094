use std::rc::Rc;

/// A location in the source text.
///
/// Both fields are 1-based. Every AST node, token and error carries one so
/// diagnostics can point at the offending construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// The physical line, starting at 1.
    pub line:   usize,
    /// The character column within the line, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    ///
    /// ## Example
    /// ```
    /// use hausalang::ast::Position;
    ///
    /// let pos = Position::new(3, 7);
    /// assert_eq!(pos.to_string(), "line 3, column 7");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, which keep their integer-versus-real distinction from the
/// lexer, and string literals with escapes already resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `3.5`.
    Real(f64),
    /// A string literal, such as `"sannu"`.
    Str(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions produce a value when evaluated. Nodes are built once by the
/// parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number or string literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Source position of the literal.
        pos:   Position,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Source position of the name.
        pos:  Position,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Source position of the operator.
        pos:  Position,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Source position of the operator.
        pos:   Position,
    },
    /// Function call expression (e.g. `hada(1, 2)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, evaluated left to right.
        arguments: Vec<Self>,
        /// Source position of the function name.
        pos:       Position,
    },
}

/// Represents a user-defined function definition.
///
/// Produced by `aiki name(params):` and registered by name when the
/// definition statement executes.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Source position of the `aiki` keyword.
    pub pos:    Position,
}

/// The iteration direction of a `don` loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `zuwa`: counts up while the variable is below the end value.
    Ascending,
    /// `ba`: counts down while the variable is above the end value.
    Descending,
}

/// A counted loop: `don i = start zuwa end ta step:`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// The loop variable name.
    pub var:       String,
    /// The starting value, evaluated once.
    pub start:     Expr,
    /// The exclusive end value, evaluated once.
    pub end:       Expr,
    /// Whether the loop counts up or down.
    pub direction: Direction,
    /// The optional step, evaluated once. Defaults to 1.
    pub step:      Option<Expr>,
    /// The loop body.
    pub body:      Vec<Statement>,
    /// Source position of the `don` keyword.
    pub pos:       Position,
}

/// Represents a statement.
///
/// Statements are executed for their effect and never produce a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name in the current scope.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Source position of the name.
        pos:   Position,
    },
    /// `rubuta expr`: writes the value without a trailing newline.
    Print {
        /// The expression to print.
        expr: Expr,
        /// Source position of the keyword.
        pos:  Position,
    },
    /// `mayar expr`: leaves the enclosing function call with a value.
    Return {
        /// The returned expression.
        expr: Expr,
        /// Source position of the keyword.
        pos:  Position,
    },
    /// `idan cond:` with an optional `in ba haka ba:` arm.
    If {
        /// The condition, tested for truthiness.
        condition: Expr,
        /// Statements run when the condition is truthy.
        then_body: Vec<Self>,
        /// Statements run otherwise, if an else arm was written.
        else_body: Option<Vec<Self>>,
        /// Source position of the keyword.
        pos:       Position,
    },
    /// `kadai cond:` loop.
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Source position of the keyword.
        pos:       Position,
    },
    /// `don` counted loop.
    For(ForLoop),
    /// A user-defined function declaration.
    FunctionDef(Rc<FunctionDef>),
    /// A standalone expression evaluated and discarded, usually a call.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Source position of the expression.
        pos:  Position,
    },
}

/// The root of the AST: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Maps an operator spelling to its binary operator, if it is one.
    ///
    /// ## Example
    /// ```
    /// use hausalang::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol(">="), Some(BinaryOperator::GreaterEqual));
    /// assert_eq!(BinaryOperator::from_symbol("="), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            _ => return None,
        };
        Some(op)
    }

    /// Returns `true` for the comparison operators, which bind weakest.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
