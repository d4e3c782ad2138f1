use calcra::{
    error::{Error, ParseError, RuntimeError},
    evaluate, ops,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!(value == expected,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("2+3", 5.0);
    assert_value("8-5", 3.0);
    assert_value("7*9", 63.0);
    assert_value("100/4", 25.0);
    assert_value("10%3", 1.0);
    assert_value("2^3", 8.0);
}

#[test]
fn additive_chains_are_left_associative() {
    assert_value("1+2+3+4", 10.0);
    assert_value("10-4-3", 3.0);
    assert_value("10-4+3", 9.0);
}

#[test]
fn multiplicative_tier_binds_first() {
    assert_value("10*5-2", 48.0);
    assert_value("2+3*4", 14.0);
    assert_value("1-2*3", -5.0);
    assert_value("20-10/2+1", 16.0);
}

#[test]
fn power_chains_left_to_right() {
    // One shared tier, so `^` is NOT right-associative: (2^3)^2, not 2^(3^2).
    assert_value("2^3^2", 64.0);
    // ...and it does not bind tighter than `*` either: (2*3)^2.
    assert_value("2*3^2", 36.0);
    assert_value("16/2^2", 64.0);
}

#[test]
fn power_edge_cases() {
    assert_value("0^0", 1.0);
    assert_value("2^0.5", 2.0_f64.powf(0.5));
    // Negative base with a fractional exponent is NaN.
    assert!(evaluate("-2^0.5").unwrap().is_nan());
}

#[test]
fn modulo_carries_the_sign_of_the_dividend() {
    assert_value("10%3", 1.0);
    assert_value("-7%3", -1.0);
    assert_value("7.5%2", 1.5);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_value("  2 + 3 * 4  ", 14.0);
    assert_value("\t10 %  3", 1.0);
}

#[test]
fn signs_fuse_into_literals() {
    assert_value("-3", -3.0);
    assert_value("+3", 3.0);
    assert_value("2+-3", -1.0);
    assert_value("2--3", 5.0);
    assert_value("3*-2", -6.0);
    assert_value(".5+.25", 0.75);
}

#[test]
fn division_by_zero_fails() {
    let e = assert_failure("5/0");
    assert!(matches!(e, Error::Runtime(RuntimeError::DivisionByZero)),
            "unexpected error: {e:?}");
    // A nonzero divisor never fails, however close to zero.
    assert!(evaluate("5/0.0001").is_ok());
}

#[test]
fn modulo_by_zero_fails() {
    let e = assert_failure("5%0");
    assert!(matches!(e, Error::Runtime(RuntimeError::ModuloByZero)),
            "unexpected error: {e:?}");
}

#[test]
fn empty_input_fails_at_position_zero() {
    let e = assert_failure("");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedNumber { position: 0 })),
            "unexpected error: {e:?}");
}

#[test]
fn blank_input_fails_past_the_whitespace() {
    let e = assert_failure("   ");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedNumber { position: 3 })),
            "unexpected error: {e:?}");
}

#[test]
fn missing_right_operand_fails() {
    let e = assert_failure("2+");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedNumber { position: 2 })),
            "unexpected error: {e:?}");

    let e = assert_failure("4*");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedNumber { position: 2 })),
            "unexpected error: {e:?}");
}

#[test]
fn malformed_literals_fail_as_invalid_numbers() {
    // The scanner consumes digits and dots greedily and leaves validation to
    // the conversion, so a double dot is caught there.
    let e = assert_failure("1.2.3");
    assert!(matches!(e,
                     Error::Parse(ParseError::InvalidNumber { ref literal, position: 0 })
                     if literal == "1.2.3"),
            "unexpected error: {e:?}");

    // A bare sign scans as a literal of its own and then fails to convert.
    let e = assert_failure("-");
    assert!(matches!(e,
                     Error::Parse(ParseError::InvalidNumber { ref literal, position: 0 })
                     if literal == "-"),
            "unexpected error: {e:?}");

    // The sign must touch its digits.
    let e = assert_failure("2+- 3");
    assert!(matches!(e, Error::Parse(ParseError::InvalidNumber { .. })),
            "unexpected error: {e:?}");
}

#[test]
fn trailing_text_is_ignored() {
    // Parsing stops at the first byte outside the grammar; whether trailing
    // text should instead be rejected is left open, so these tests pin the
    // current ignore-it behavior rather than guess.
    assert_value("2+3abc", 5.0);
    assert_value("2 3", 2.0);
    // Exponent notation is outside the numeral grammar, so `e3` is trailing.
    assert_value("1e3", 1.0);
}

#[test]
fn evaluation_is_idempotent() {
    let src = "2+3*4-5%2";
    let first = evaluate(src).unwrap();
    let second = evaluate(src).unwrap();
    assert!(first == second, "same input gave {first} then {second}");
}

#[test]
fn primitives_match_their_operators() {
    assert!(ops::add(2.0, 3.0) == 5.0);
    assert!(ops::subtract(2.0, 3.0) == -1.0);
    assert!(ops::multiply(2.0, 3.0) == 6.0);
    assert!(ops::divide(3.0, 2.0).unwrap() == 1.5);
    assert!(ops::modulo(-7.0, 3.0).unwrap() == -1.0);
    assert!(ops::power(2.0, 10.0) == 1024.0);
}

#[test]
fn fallible_primitives_fail_exactly_on_zero() {
    assert!(matches!(ops::divide(1.0, 0.0), Err(RuntimeError::DivisionByZero)));
    assert!(matches!(ops::modulo(1.0, 0.0), Err(RuntimeError::ModuloByZero)));
    assert!(ops::divide(1.0, f64::MIN_POSITIVE).is_ok());
    assert!(ops::modulo(1.0, -f64::MIN_POSITIVE).is_ok());
}

#[test]
fn errors_render_their_positions() {
    let e = assert_failure("2*");
    assert_eq!(e.to_string(), "Expected number at position 2.");

    let e = assert_failure("5/0");
    assert_eq!(e.to_string(), "Division by zero.");
}
