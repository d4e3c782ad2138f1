/// Advances the cursor past any run of ASCII whitespace.
///
/// Does nothing when the cursor already sits on a non-whitespace byte or at
/// the end of the input. The cursor never moves backwards.
///
/// # Parameters
/// - `bytes`: The input text as bytes.
/// - `pos`: The shared cursor.
pub fn skip_whitespace(bytes: &[u8], pos: &mut usize) {
    while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
}
