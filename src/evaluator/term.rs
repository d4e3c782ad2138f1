use crate::{
    error::EvalResult,
    evaluator::{cursor::skip_whitespace, number::scan_number},
    ops,
};

/// Parses a multiplicative/power term and returns its value.
///
/// Handles the left-associative operators `*`, `/`, `%` and `^`, which all
/// share this single precedence tier. In particular `^` chains left to right
/// like the others: `2^3^2` is `(2^3)^2 = 64`, not the right-associative
/// `2^(3^2)` of mathematical convention. This is a deliberate property of
/// the grammar, not an oversight.
///
/// The rule is: `term := number (("*" | "/" | "%" | "^") number)*`
///
/// Operands are folded into the running result as soon as they are scanned,
/// so a zero divisor fails the evaluation at the exact point it is reached.
///
/// # Parameters
/// - `expr`: The input text.
/// - `pos`: The shared cursor.
///
/// # Returns
/// The accumulated value of the term.
pub fn parse_term(expr: &str, pos: &mut usize) -> EvalResult<f64> {
    let bytes = expr.as_bytes();
    let mut result = scan_number(expr, pos)?;

    while *pos < bytes.len() {
        skip_whitespace(bytes, pos);

        let op = match bytes.get(*pos) {
            Some(&op @ (b'*' | b'/' | b'%' | b'^')) => op,
            _ => break,
        };
        *pos += 1;

        let right = scan_number(expr, pos)?;
        result = match op {
            b'*' => ops::multiply(result, right),
            b'/' => ops::divide(result, right)?,
            b'%' => ops::modulo(result, right)?,
            _ => ops::power(result, right),
        };
    }

    Ok(result)
}
