use crate::error::RuntimeError;

/// Adds two numbers.
///
/// # Example
/// ```
/// use calcra::ops::add;
///
/// assert_eq!(add(2.0, 3.0), 5.0);
/// ```
#[must_use]
pub const fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts `b` from `a`.
///
/// # Example
/// ```
/// use calcra::ops::subtract;
///
/// assert_eq!(subtract(8.0, 5.0), 3.0);
/// ```
#[must_use]
pub const fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two numbers.
///
/// # Example
/// ```
/// use calcra::ops::multiply;
///
/// assert_eq!(multiply(7.0, 9.0), 63.0);
/// ```
#[must_use]
pub const fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// The divisor is checked against zero exactly, not within a tolerance.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` when `b` is exactly `0.0`.
///
/// # Example
/// ```
/// use calcra::{error::RuntimeError, ops::divide};
///
/// assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
/// assert!(matches!(divide(5.0, 0.0), Err(RuntimeError::DivisionByZero)));
/// ```
pub const fn divide(a: f64, b: f64) -> Result<f64, RuntimeError> {
    if b == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(a / b)
}

/// Computes the floating-point remainder of `a / b`.
///
/// The result carries the sign of `a`, not of `b`, matching `f64`'s `%`
/// operator. The divisor is checked against zero exactly.
///
/// # Errors
/// Returns `RuntimeError::ModuloByZero` when `b` is exactly `0.0`.
///
/// # Example
/// ```
/// use calcra::{error::RuntimeError, ops::modulo};
///
/// assert_eq!(modulo(10.0, 3.0).unwrap(), 1.0);
/// assert_eq!(modulo(-7.0, 3.0).unwrap(), -1.0);
/// assert!(matches!(modulo(5.0, 0.0), Err(RuntimeError::ModuloByZero)));
/// ```
pub const fn modulo(a: f64, b: f64) -> Result<f64, RuntimeError> {
    if b == 0.0 {
        return Err(RuntimeError::ModuloByZero);
    }
    Ok(a % b)
}

/// Raises `a` to the power `b`.
///
/// Delegates to [`f64::powf`] and inherits its edge cases: `0^0` is `1.0`,
/// and a negative base with a fractional exponent is NaN.
///
/// # Example
/// ```
/// use calcra::ops::power;
///
/// assert_eq!(power(2.0, 3.0), 8.0);
/// assert_eq!(power(0.0, 0.0), 1.0);
/// assert!(power(-2.0, 0.5).is_nan());
/// ```
#[must_use]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}
