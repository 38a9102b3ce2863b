/// Dispatch from operator to evaluation rule.
pub mod core;

/// Arithmetic over integers, floats, and strings.
pub mod arithmetic;

/// Equality and ordering comparisons.
pub mod comparison;
