/// Numeric conversion helpers.
///
/// This module promotes integers for float arithmetic and bounds the sizes
/// computed for string repetition, reporting failures as `RuntimeError`s.
pub mod num;
