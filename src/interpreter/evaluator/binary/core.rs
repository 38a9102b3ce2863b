use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{arithmetic::eval_arithmetic, comparison::eval_comparison},
            core::EvalResult,
        },
        value::Value,
    },
};

/// Evaluates a binary operation between two already evaluated values.
///
/// This function routes the operation to specialized handlers depending on
/// the operator. Arithmetic operators use `eval_arithmetic`; relational and
/// equality operators use `eval_comparison`. The logical operators `&&` and
/// `||` have a precedence level but no evaluation rule, so they fail with
/// `RuntimeError::UnknownOperator`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use bongscript::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::core::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let and = eval_binary(BinaryOperator::And, &Value::Bool(true), &Value::Bool(true), 2);
/// assert!(matches!(and, Err(RuntimeError::UnknownOperator { line: 2, .. })));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   line: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Sub,
    };

    match op {
        Add | Sub | Mul | Div | Mod => eval_arithmetic(op, left, right, line),
        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
            eval_comparison(op, left, right, line)
        },
        And | Or => Err(RuntimeError::UnknownOperator { op: op.to_string(),
                                                        line }),
    }
}

/// Builds the type error for operands an operator cannot combine.
pub(in crate::interpreter::evaluator) fn operand_type_error(op: BinaryOperator,
                                                            left: &Value,
                                                            right: &Value,
                                                            line: usize)
                                                            -> RuntimeError {
    RuntimeError::TypeError { details: format!("Cannot use '{op}' on {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
