use crate::{
    error::EvalResult,
    evaluator::{cursor::skip_whitespace, term::parse_term},
    ops,
};

/// Parses a full additive expression and returns its value.
///
/// This is the entry point of the grammar. Handles the left-associative
/// binary operators `+` and `-` over terms, so the multiplicative/power tier
/// binds first: `10*5-2` is `(10*5)-2 = 48`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// Parsing stops at the first byte that fits neither tier; the cursor is
/// left on that byte, and any remaining input is the caller's to inspect.
///
/// # Parameters
/// - `expr`: The input text.
/// - `pos`: The shared cursor.
///
/// # Returns
/// The accumulated value of the expression.
pub fn parse_expression(expr: &str, pos: &mut usize) -> EvalResult<f64> {
    let bytes = expr.as_bytes();
    let mut result = parse_term(expr, pos)?;

    while *pos < bytes.len() {
        skip_whitespace(bytes, pos);

        let op = match bytes.get(*pos) {
            Some(&op @ (b'+' | b'-')) => op,
            _ => break,
        };
        *pos += 1;

        let right = parse_term(expr, pos)?;
        result = if op == b'+' {
            ops::add(result, right)
        } else {
            ops::subtract(result, right)
        };
    }

    Ok(result)
}
