//! 3-to-4 packing and null-run escapes

use crate::alphabet::{to_char, ESCAPE};
use crate::{MAX_NULL_RUN, MIN_NULL_RUN};

/// Marker for one synthetic padding byte at the end of the stream
pub const PADDING_MARKER: &str = "~0";

/// Pack a byte triple into a quad of 6-bit characters
pub fn pack(triple: [u8; 3]) -> [char; 4] {
    let [x, y, z] = triple;

    let a = x >> 2;
    let b = ((x << 4) | (y >> 4)) & 0x3F;
    let c = ((y << 2) | (z >> 6)) & 0x3F;
    let d = z & 0x3F;

    [to_char(a), to_char(b), to_char(c), to_char(d)]
}

/// Escape a run of `count` null bytes as `~` plus the mapped count
pub fn escape(count: u8) -> [char; 2] {
    debug_assert!(
        (MIN_NULL_RUN..=MAX_NULL_RUN).contains(&count),
        "null run of {} cannot be escaped",
        count
    );
    [ESCAPE, to_char(count)]
}

/// Padding markers for `fill` synthetic bytes (0, 1 or 2)
pub fn padding(fill: usize) -> String {
    PADDING_MARKER.repeat(fill)
}
