//! Mirroring a text into a palindrome.

/// Separator placed between a text and its reversal.
pub const PALINDROME_SEPARATOR: char = ' ';

/// Append [`PALINDROME_SEPARATOR`] and the character-wise reversal of `text`.
///
/// Reversal works on `char`s, the same unit the letter counter iterates.
pub fn mirror(text: &str) -> String {
    let mut out = String::with_capacity(text.len().saturating_mul(2).saturating_add(1));
    out.push_str(text);
    out.push(PALINDROME_SEPARATOR);
    out.extend(text.chars().rev());
    out
}

/// Whether `text` reads the same forwards and backwards by `char`.
pub fn is_palindrome(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}
