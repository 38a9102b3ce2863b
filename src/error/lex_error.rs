/// The reason a single lexing step failed.
///
/// This is the error type the `logos` lexer produces internally. It carries no
/// location; [`LexError`] attaches the offending text and line afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    UnknownCharacter,
    /// A `"` was opened but the input ended before it was closed.
    UnterminatedString,
    /// An integer literal does not fit in a 64-bit signed integer.
    LiteralTooLarge,
    /// A numeric literal could not be converted to its value.
    InvalidNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character that cannot begin any token.
    UnknownCharacter {
        /// The offending source text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal without its closing quote.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal too large to represent.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A malformed numeric literal.
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Attaches the offending slice and line to a [`LexErrorKind`].
    #[must_use]
    pub fn from_kind(kind: LexErrorKind, slice: &str, line: usize) -> Self {
        match kind {
            LexErrorKind::UnknownCharacter => Self::UnknownCharacter { character: slice.to_string(),
                                                                       line },
            LexErrorKind::UnterminatedString => Self::UnterminatedString { line },
            LexErrorKind::LiteralTooLarge => Self::LiteralTooLarge { literal: slice.to_string(),
                                                                     line },
            LexErrorKind::InvalidNumber => Self::InvalidNumber { literal: slice.to_string(),
                                                                 line },
        }
    }

    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::LiteralTooLarge { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, line } => {
                write!(f, "Error on line {line}: Unknown character '{character}'.")
            },
            Self::UnterminatedString { line } => write!(f,
                                                        "Error on line {line}: Unterminated string literal, expected closing '\"'."),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Integer literal {literal} is too large.")
            },
            Self::InvalidNumber { literal, line } => {
                write!(f, "Error on line {line}: Invalid numeric literal {literal}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
