#[derive(Debug)]
/// Represents all errors that can occur while scanning an expression.
pub enum ParseError {
    /// A numeric literal was expected but not found.
    ExpectedNumber {
        /// The byte offset in the input where the literal was expected.
        position: usize,
    },
    /// A scanned literal could not be converted to a number.
    InvalidNumber {
        /// The text that was scanned as a literal.
        literal:  String,
        /// The byte offset in the input where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { position } => {
                write!(f, "Expected number at position {position}.")
            },

            Self::InvalidNumber { literal, position } => {
                write!(f, "Invalid number '{literal}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
