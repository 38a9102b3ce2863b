/// A numeric literal as written in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberLiteral {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `2.5` or `3.`.
    Float(f64),
}

impl From<i64> for NumberLiteral {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumberLiteral {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// The kind of value an input expression reads from the console.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// `sonkhya nao()`: one line parsed as an integer.
    Int,
    /// `dosomik nao()`: one line parsed as a float.
    Float,
    /// `bhasha nao()`: one line taken verbatim.
    String,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
        };
        write!(f, "{kind}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are the only nodes that produce values. Variants that can fail
/// while being evaluated carry the line they were parsed on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(NumberLiteral),
    /// A string literal, stored without its quotes.
    String(String),
    /// A boolean literal, `true` or `false`.
    Boolean(bool),
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation such as `a + b` or `x <= 3`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A blocking read of one console line.
    Input {
        /// How the line is converted.
        kind: InputKind,
        /// Line number in the source code.
        line: usize,
    },
}

impl From<NumberLiteral> for Expr {
    fn from(value: NumberLiteral) -> Self {
        Self::Number(value)
    }
}

/// A conditional statement, `jodi (...) { ... }`, with its optional else part.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition, tested for truthiness.
    pub condition:   Expr,
    /// Statements run when the condition holds.
    pub body:        Vec<Statement>,
    /// What runs otherwise.
    pub else_branch: Option<ElseBranch>,
}

/// The part of an `if` after `nahole`.
///
/// An else-if chain nests: each `nahole jodi` owns the remainder of the chain
/// as its own `else_branch`.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// `nahole { ... }`
    Block(Vec<Statement>),
    /// `nahole jodi (...) { ... } ...`
    If(Box<IfStatement>),
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A declaration (`eta holo x = ...;`) or reassignment (`x = ...;`).
    ///
    /// Both store into the same flat environment; the flag only records which
    /// form was written.
    Assign {
        /// The name of the variable.
        name:           String,
        /// The value which is being assigned.
        expr:           Expr,
        /// Whether the statement was written with `eta holo`.
        is_declaration: bool,
        /// Line number in the source code.
        line:           usize,
    },
    /// `lekho(...)` prints with a newline, `ullekho(...)` without.
    Print {
        /// The value to print.
        expr:         Expr,
        /// Whether a line terminator follows the value.
        with_newline: bool,
        /// Line number in the source code.
        line:         usize,
    },
    /// `jodi (...) { ... } [nahole ...]`
    If(IfStatement),
    /// `jotokhon (...) { ... }`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
    },
    /// `theme jao;`
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `egiye jao;`
    Continue {
        /// Line number in the source code.
        line: usize,
    },
}

/// A complete program: everything between `kaj shuru` and `kaj shesh`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons, and the two logical
/// operators, which parse at their own precedence levels but have no
/// evaluation rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
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
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

impl BinaryOperator {
    /// Gets the binding strength used by precedence climbing.
    ///
    /// Higher binds tighter; every operator has a precedence of at least 1.
    ///
    /// ## Example
    /// ```
    /// use bongscript::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Or.precedence(), 1);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual => 3,
            Self::Add | Self::Sub => 4,
            Self::Mul | Self::Div | Self::Mod => 5,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Sub,
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
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}
