/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token other than the one the grammar expected.
    #[error("Error on line {line}, column {column}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar expected here.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input while the grammar still expected something.
    #[error("Error on line {line}, column {column}: Expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// Description of what the grammar expected here.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The lexer met a character that starts no token.
    #[error("Error on line {line}, column {column}: Invalid character sequence '{text}'.")]
    InvalidCharacter {
        /// The offending source text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    #[error("Error on line {line}, column {column}: Integer literal {text} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Returns the `(line, column)` position the error refers to.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        match self {
            Self::UnexpectedToken { line, column, .. }
            | Self::UnexpectedEndOfInput { line, column, .. }
            | Self::InvalidCharacter { line, column, .. }
            | Self::LiteralTooLarge { line, column, .. } => (*line, *column),
        }
    }
}
