#[derive(Debug)]
/// Represents all errors that can occur while combining operands.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ModuloByZero => write!(f, "Modulo by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
