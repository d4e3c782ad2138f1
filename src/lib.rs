//! # calcra
//!
//! calcra is a small arithmetic calculator written in Rust.
//! It evaluates expressions such as `10*5-2` or `2^3^2` in a single pass over
//! the input text, with no token stream and no syntax tree, producing an
//! `f64` result or a descriptive error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::error::EvalResult;

/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. It standardizes error reporting and carries detailed
/// information about failures, including input positions for debugging and
/// user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexing, arithmetic).
/// - Attaches input positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Evaluates expressions directly from their textual form.
///
/// This module contains the recursive-descent evaluator. Scanning and
/// evaluation are fused: each parsing function reads characters from the
/// input through a shared cursor and folds operands into a running `f64` as
/// it goes, so no token stream or syntax tree is ever built.
///
/// # Responsibilities
/// - Scans numeric literals straight out of the input text.
/// - Applies the two precedence tiers (additive; multiplicative/power).
/// - Threads the shared cursor through every parsing step of one evaluation.
pub mod evaluator;
/// The arithmetic primitives the evaluator folds operands with.
///
/// This module provides the six pure operations on `f64` values. The
/// fallible ones (division, modulo) report their failure as an error value
/// rather than a special result.
///
/// # Responsibilities
/// - Implements `add`, `subtract`, `multiply`, `divide`, `modulo`, `power`.
/// - Checks divisors exactly against zero before dividing.
pub mod ops;

/// Evaluates an arithmetic expression and returns its value.
///
/// This is the crate's entry point. The expression may use the binary
/// operators `+ - * / % ^` between numeric literals; `* / % ^` share one
/// precedence tier and bind before `+ -`, and every operator chains left to
/// right. A literal may carry a single leading sign.
///
/// Each call is independent and re-entrant: the cursor lives on this stack
/// frame, so the function holds no state across calls and may run on many
/// threads at once.
///
/// Note that input is consumed as far as the grammar reaches; trailing text
/// after a complete expression is ignored rather than rejected.
///
/// # Errors
/// Returns an error if a numeric literal is missing or malformed, or if a
/// division or modulo has an exactly-zero divisor.
///
/// # Examples
/// ```
/// use calcra::evaluate;
///
/// assert_eq!(evaluate("2+3").unwrap(), 5.0);
/// assert_eq!(evaluate("10*5-2").unwrap(), 48.0);
///
/// // Division by zero is an error value, not a panic.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let mut position = 0;
    evaluator::expression::parse_expression(expression, &mut position)
}
