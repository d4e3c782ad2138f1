/// Scanning errors.
///
/// Defines all error types that can occur while scanning an expression.
/// Parse errors include missing operands, malformed numeric literals, and
/// any other issue detected while reading the input text.
pub mod parse_error;
/// Arithmetic errors.
///
/// Contains all error types that can be raised while combining operands.
/// Runtime errors cover division and modulo with an exactly-zero divisor.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The result type returned by evaluation.
pub type EvalResult<T> = Result<T, Error>;

#[derive(Debug)]
/// Any error an evaluation can fail with.
///
/// Scanning the input and combining operands happen in the same pass, so a
/// single evaluation can fail in either phase. This enum unions the two so
/// `?` threads both through one return type.
pub enum Error {
    /// The input text could not be scanned.
    Parse(ParseError),
    /// An arithmetic operation was undefined for its operands.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
