use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
    util::num::{i64_to_f64, repeat_count_checked, repeated_len_checked},
};

/// Evaluates an arithmetic operation.
///
/// Two integers stay integers for `+`, `-`, `*` and `%`, with overflow
/// checked. An integer meeting a float is promoted to a float. `/` is true
/// division and always produces a float. `%` takes the sign of the divisor,
/// so `-7 % 3` is `2`. Strings concatenate with `+` and repeat with `*` and an
/// integer count; a repetition longer than
/// [`MAX_STRING_BYTES`](crate::util::num::MAX_STRING_BYTES) fails with
/// `RuntimeError::StringTooLong`.
///
/// # Parameters
/// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `Mod`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use bongscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::Value},
/// };
///
/// let x = Value::Integer(7);
/// let y = Value::Integer(2);
///
/// assert_eq!(eval_arithmetic(BinaryOperator::Div, &x, &y, 1).unwrap(), Value::Float(3.5));
/// assert_eq!(eval_arithmetic(BinaryOperator::Add, &Value::from("ab"), &Value::from("cd"), 1).unwrap(),
///            Value::from("abcd"));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Add, Mul};
    use Value::{Integer, Str};

    match (left, right) {
        (Integer(a), Integer(b)) => eval_integer_op(op, *a, *b, line),
        _ if left.is_numeric() && right.is_numeric() => {
            eval_float_op(op, left.as_float(line)?, right.as_float(line)?, line)
        },
        (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
        (Str(s), Integer(n)) | (Integer(n), Str(s)) if op == Mul => {
            let count = repeat_count_checked(*n, line)?;
            repeated_len_checked(s.len(), count, line)?;
            Ok(Str(s.repeat(count)))
        },
        _ => Err(operand_type_error(op, left, right, line)),
    }
}

/// Applies an arithmetic operator to two integers.
fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => a.checked_add(b),
        Sub => a.checked_sub(b),
        Mul => a.checked_mul(b),
        Div => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            return Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b)));
        },
        Mod => {
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            // sign follows the divisor
            a.checked_rem(b)
             .map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
        },
        _ => {
            return Err(RuntimeError::UnknownOperator { op: op.to_string(),
                                                       line });
        },
    };

    result.map(Value::Integer)
          .ok_or(RuntimeError::Overflow { line })
}

/// Applies an arithmetic operator to two floats.
fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Mod, Mul, Sub};

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a / b
        },
        Mod => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
        },
        _ => {
            return Err(RuntimeError::UnknownOperator { op: op.to_string(),
                                                       line });
        },
    };

    Ok(Value::Float(result))
}
