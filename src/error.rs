/// Lexing errors.
///
/// Raised while turning raw source text into tokens: characters the language
/// does not know, string literals that never close, and integer literals that
/// do not fit in 64 bits.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// the token stream. Each one names the construct the grammar required and the
/// token that was found instead.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during execution, such as
/// undefined variables, unsupported operators, type mismatches, malformed
/// console input, or loop signals escaping their loop.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
