#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A grammar rule required one token but found another.
    UnexpectedToken {
        /// What the grammar expected at this point.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No statement begins with the token found.
    UnexpectedStatement {
        /// The token actually found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The input ended before a `}` closed the current block.
    UnterminatedBlock {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The token stream ran out, which means it lacked its end-of-file token.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found tokens after `kaj shesh`.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedStatement { line, .. }
            | Self::UnterminatedBlock { line }
            | Self::UnexpectedEndOfInput { line }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedStatement { found, line } => {
                write!(f, "Error on line {line}: Unexpected statement starting with {found}.")
            },
            Self::UnterminatedBlock { line } => {
                write!(f, "Error on line {line}: Unexpected end of file in block.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after 'kaj shesh': {token}."),
        }
    }
}

impl std::error::Error for ParseError {}
