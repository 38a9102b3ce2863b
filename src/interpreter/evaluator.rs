/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation and repetition, and comparisons.
pub mod binary;

/// Core evaluation logic and interpreter state.
///
/// Contains the main evaluation engine: statement execution, expression
/// evaluation, and console output.
pub mod core;

/// Conditionals, loops, and loop-control signals.
///
/// Defines the `Signal` outcome of statement execution and the `jodi` and
/// `jotokhon` rules that consume it.
pub mod control;

/// The run-scoped variable store.
pub mod environment;

/// Console input.
///
/// Reads one line per input expression and converts it to the requested kind.
pub mod input;
