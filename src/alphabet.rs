//! Character mapping shared by quads and escapes

/// Escape prefix introducing a null run or a padding marker
pub const ESCAPE: char = '~';

/// Code point that maps to value 0
pub const ALPHABET_BASE: u8 = b'0';

/// Largest value the mapping accepts (`'~'`)
pub const MAX_VALUE: u8 = ESCAPE as u8 - ALPHABET_BASE;

/// Map a 6-bit value or a run length to its character.
///
/// Values 0..=63 land in `'0'..='o'`, run lengths up to 78 reach `'~'`.
/// Callers keep `n` within `0..=MAX_VALUE`.
#[inline]
pub fn to_char(n: u8) -> char {
    debug_assert!(n <= MAX_VALUE, "value {} out of alphabet range", n);
    (ALPHABET_BASE + n) as char
}

/// Reverse of [`to_char`]: `None` for anything outside `'0'..='~'`
#[inline]
pub fn from_char(c: char) -> Option<u8> {
    if c.is_ascii() {
        let b = c as u8;
        if (ALPHABET_BASE..=ESCAPE as u8).contains(&b) {
            return Some(b - ALPHABET_BASE);
        }
    }
    None
}
