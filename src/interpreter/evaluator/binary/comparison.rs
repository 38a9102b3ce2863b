use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::operand_type_error, core::EvalResult},
        value::Value,
    },
    util::num::i64_to_f64,
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Numbers compare by value across integers and floats, strings
/// lexicographically, and booleans with `false < true`. Values of unrelated
/// types are never equal, so `==` yields `false` and `!=` yields `true`, but
/// ordering them is a type error.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A `Value::Bool` holding the comparison result.
///
/// # Example
/// ```
/// use bongscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::Value},
/// };
///
/// let eq = eval_comparison(BinaryOperator::Equal, &Value::Integer(2), &Value::Float(2.0), 1);
/// assert_eq!(eq.unwrap(), Value::Bool(true));
///
/// let mixed = eval_comparison(BinaryOperator::Equal, &Value::Integer(1), &Value::from("1"), 1);
/// assert_eq!(mixed.unwrap(), Value::Bool(false));
///
/// let ordered = eval_comparison(BinaryOperator::Less, &Value::Integer(1), &Value::from("1"), 1);
/// assert!(ordered.is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let Some(ordering) = compare_values(left, right) else {
        return match op {
            Equal => Ok(Value::Bool(false)),
            NotEqual => Ok(Value::Bool(true)),
            _ => Err(operand_type_error(op, left, right, line)),
        };
    };

    let result = match op {
        Equal => ordering == Some(Ordering::Equal),
        NotEqual => ordering != Some(Ordering::Equal),
        Less => ordering == Some(Ordering::Less),
        Greater => ordering == Some(Ordering::Greater),
        LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => {
            return Err(RuntimeError::UnknownOperator { op: op.to_string(),
                                                       line });
        },
    };

    Ok(Value::Bool(result))
}

/// Orders two values of comparable types.
///
/// # Returns
/// - `None` if the types are unrelated.
/// - `Some(None)` if the types match but the values are unordered (`NaN`).
/// - `Some(Some(ordering))` otherwise.
fn compare_values(left: &Value, right: &Value) -> Option<Option<Ordering>> {
    use Value::{Bool, Float, Integer, Str};

    let ordering = match (left, right) {
        (Integer(a), Integer(b)) => Some(a.cmp(b)),
        (Integer(a), Float(b)) => compare_int_float(*a, *b),
        (Float(a), Integer(b)) => compare_int_float(*b, *a).map(Ordering::reverse),
        (Float(a), Float(b)) => a.partial_cmp(b),
        (Str(a), Str(b)) => Some(a.cmp(b)),
        (Bool(a), Bool(b)) => Some(a.cmp(b)),
        _ => return None,
    };

    Some(ordering)
}

/// Compares an integer with a float exactly, without rounding the integer.
///
/// Promotion to `f64` preserves order, so it only needs refining when the
/// promoted integer lands on the float itself. The float is integral then and
/// both sides fit in an `i128`.
#[allow(clippy::cast_possible_truncation)]
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    match i64_to_f64(int).partial_cmp(&float)? {
        Ordering::Equal => Some(i128::from(int).cmp(&(float as i128))),
        ordering => Some(ordering),
    }
}
