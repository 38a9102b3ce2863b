use crate::{
    ast::NumberLiteral,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the values a variable can hold and an expression can
/// produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Float(f64),
    /// A text value.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and boolean
    /// literals.
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<NumberLiteral> for Value {
    fn from(v: NumberLiteral) -> Self {
        match v {
            NumberLiteral::Integer(n) => Self::Integer(n),
            NumberLiteral::Float(r) => Self::Float(r),
        }
    }
}

impl Value {
    /// Decides whether the value counts as true in a condition.
    ///
    /// Booleans are themselves, numbers are truthy when non-zero and strings
    /// when non-empty.
    ///
    /// # Example
    /// ```
    /// use bongscript::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Float(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Bool(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Whether the value is an integer or a float.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Gets the name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
        }
    }

    /// Converts a numeric value to an `f64`.
    ///
    /// Integers are rounded to the nearest float.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is a float or an integer.
    /// - `Err(RuntimeError::TypeError)`: If the value is not numeric.
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => fmt_float(*r, f),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
        }
    }
}

/// Writes a float in its shortest round-trip form.
///
/// Decimal exponents from -4 up to 15 print positionally, with at least one
/// fractional digit (`5.0`, `0.0001`). Anything outside that range prints in
/// exponent form with a signed, two-digit exponent (`1e+16`, `2.5e-05`).
fn fmt_float(r: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if r.is_nan() {
        return write!(f, "nan");
    }
    if r.is_infinite() {
        return write!(f, "{}", if r > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{r:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
       && let Ok(exponent) = exponent.parse::<i32>()
       && !(-4..16).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    if r.fract() == 0.0 { write!(f, "{r:.1}") } else { write!(f, "{r}") }
}
