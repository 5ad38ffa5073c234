//! Letter/index conversion utilities for the 26-letter alphabet.
//!
//! All rotor arithmetic works on indices in `0..26`. These helpers are the
//! only place where characters are turned into indices and back.

/// The standard alphabet in contact order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of contacts on every wheel.
pub const LETTERS: usize = 26;

/// Converts an ASCII letter of either case to its index in the alphabet.
///
/// # Returns
/// `Some(0..26)` for `A`-`Z`/`a`-`z`, `None` for anything else.
pub fn letter_to_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Converts an index to its uppercase letter. The index is reduced modulo 26.
pub fn index_to_letter(index: usize) -> char {
    ALPHABET[index % LETTERS] as char
}

/// Returns `(a + b) mod 26` for `a` in `0..26` and any signed `b`.
pub(crate) fn wrap(a: usize, b: i32) -> usize {
    (a as i32 + b).rem_euclid(LETTERS as i32) as usize
}
