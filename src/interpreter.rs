/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the AST, executes statements in program order,
/// evaluates expressions, manages the variable environment, and performs all
/// console input and output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind with one exhaustive match per traversal.
/// - Propagates `theme jao` / `egiye jao` as explicit signals to the nearest
///   loop.
/// - Reports runtime errors such as undefined variables or invalid operands.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Skips whitespace and `montobbo` comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`crate::ast::Program`] by recursive descent, using precedence climbing
/// for binary expressions.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates the grammar, reporting what was expected and what was found.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (integers, floats, strings, booleans) together
/// with truthiness, numeric promotion, and the text form used for printing.
pub mod value;
