use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest string, in bytes, that repetition may build.
pub const MAX_STRING_BYTES: usize = 1 << 30;

/// Promotes an `i64` to the nearest `f64`.
///
/// Integers are promoted this way whenever they meet a float in arithmetic,
/// and for true division. Magnitudes above `2^53` round to the nearest
/// representable float.
///
/// ## Example
/// ```
/// use bongscript::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a repetition count to `usize`, treating negative counts as zero.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit in `usize`.
///
/// ## Example
/// ```
/// use bongscript::util::num::repeat_count_checked;
///
/// assert_eq!(repeat_count_checked(3, 1).unwrap(), 3);
/// assert_eq!(repeat_count_checked(-2, 1).unwrap(), 0);
/// ```
pub fn repeat_count_checked(value: i64, line: usize) -> EvalResult<usize> {
    usize::try_from(value.max(0)).map_err(|_| RuntimeError::Overflow { line })
}

/// Computes the byte length of a string repeated `count` times.
///
/// ## Errors
/// Returns `RuntimeError::StringTooLong` if the result would exceed
/// [`MAX_STRING_BYTES`].
///
/// ## Example
/// ```
/// use bongscript::{
///     error::RuntimeError,
///     util::num::{MAX_STRING_BYTES, repeated_len_checked},
/// };
///
/// assert_eq!(repeated_len_checked(2, 3, 1).unwrap(), 6);
/// assert!(matches!(repeated_len_checked(2, MAX_STRING_BYTES, 4),
///                  Err(RuntimeError::StringTooLong { line: 4 })));
/// ```
pub fn repeated_len_checked(len: usize, count: usize, line: usize) -> EvalResult<usize> {
    len.checked_mul(count)
       .filter(|total| *total <= MAX_STRING_BYTES)
       .ok_or(RuntimeError::StringTooLong { line })
}
