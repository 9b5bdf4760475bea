//! The legal guessing alphabet
//!
//! Danish board rules: the Latin letters A-Z plus Æ, Ø and Å. Anything
//! outside this set is never a valid guess, space included.

/// Every letter a player may guess, in board order.
pub const LEGAL_ALPHABET: [char; 29] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Æ', 'Ø', 'Å',
];

/// Check whether an (already uppercased) character is guessable
#[inline]
#[must_use]
pub fn is_legal(ch: char) -> bool {
    LEGAL_ALPHABET.contains(&ch)
}

/// Uppercase a single character the way the board stores text
///
/// The Danish letters map cleanly (æ→Æ, ø→Ø, å→Å), so the first char of
/// the uppercase expansion is always the right one here.
#[inline]
#[must_use]
pub fn normalize(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}
