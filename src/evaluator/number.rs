use crate::{error::ParseError, evaluator::cursor::skip_whitespace};

/// Scans one numeric literal starting at the cursor.
///
/// Skips leading whitespace, consumes an optional single `+` or `-` sign,
/// then consumes the maximal run of ASCII digits and `.` characters. The
/// consumed slice is handed to `str::parse::<f64>()` as-is: the scanner does
/// not validate the numeral grammar itself, so shapes like `1.2.3` or a bare
/// sign are only rejected by the conversion. Only ASCII bytes are ever
/// consumed, so the slice always falls on character boundaries.
///
/// The sign is part of the literal: `3*-2` scans `-2` as the right operand,
/// while `- 2` (sign detached from its digits) does not convert.
///
/// # Parameters
/// - `expr`: The input text.
/// - `pos`: The shared cursor; on success it rests one past the literal.
///
/// # Returns
/// The converted `f64` value.
///
/// # Errors
/// - `ExpectedNumber` when not a single byte could be consumed.
/// - `InvalidNumber` when the consumed slice does not convert to an `f64`.
pub fn scan_number(expr: &str, pos: &mut usize) -> Result<f64, ParseError> {
    let bytes = expr.as_bytes();
    skip_whitespace(bytes, pos);

    let start = *pos;
    if *pos < bytes.len() && (bytes[*pos] == b'-' || bytes[*pos] == b'+') {
        *pos += 1;
    }

    while *pos < bytes.len() && (bytes[*pos].is_ascii_digit() || bytes[*pos] == b'.') {
        *pos += 1;
    }

    if start == *pos {
        return Err(ParseError::ExpectedNumber { position: *pos });
    }

    let literal = &expr[start..*pos];
    literal.parse().map_err(|_| {
                       ParseError::InvalidNumber { literal:  literal.to_string(),
                                                   position: start, }
                   })
}
