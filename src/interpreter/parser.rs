/// Entry points for parsing.
///
/// Holds the program rule (`kaj shuru ... kaj shesh`), the expression entry
/// point and the shared result type.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement and parses prints,
/// declarations, assignments, conditionals, loops, and loop signals.
pub mod statement;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by `jodi`, `nahole` and
/// `jotokhon`.
pub mod block;

/// Binary expression parsing.
///
/// Resolves operator precedence and left-associativity by precedence
/// climbing.
pub mod binary;

/// Term parsing.
///
/// Parses the operands of binary expressions: literals, variables, console
/// input, and parenthesized expressions.
pub mod term;

/// Utility functions for the parser.
///
/// Provides helpers for consuming required tokens and identifiers.
pub mod utils;
