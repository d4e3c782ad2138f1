/// Cursor helpers shared by every parsing step.
///
/// The cursor is a byte offset into the input text, threaded by mutable
/// reference through all scanning functions of one evaluation. It only ever
/// moves forward.
pub mod cursor;
/// The additive tier and entry point of the grammar.
///
/// Parses chains of `+` and `-` over terms, left to right. This is the
/// lowest-precedence tier, so it is where an evaluation begins.
pub mod expression;
/// The number lexer.
///
/// Scans a single numeric literal, including an optional leading sign, out
/// of the raw input text.
pub mod number;
/// The multiplicative/power tier of the grammar.
///
/// Parses chains of `*`, `/`, `%` and `^` over numbers, left to right. All
/// four operators share this one tier.
pub mod term;
