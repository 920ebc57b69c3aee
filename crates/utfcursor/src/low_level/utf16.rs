//! UTF-16 word classification and surrogate-pair primitives.
//!
//! ```text
//! Table 3-5. UTF-16 Bit Distribution
//! Scalar Value               UTF-16
//! xxxxxxxxxxxxxxxx           xxxxxxxxxxxxxxxx
//! 000uuuuuxxxxxxxxxxxxxxxx   110110wwwwxxxxxx 110111xxxxxxxxxx
//! (wwww = uuuuu - 1)
//! ```

use crate::byte_manip::reverse_bytes;

/// True iff `w` is a scalar value on its own, i.e. it is not in
/// `0xD800..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_valid_single_word_scalar(w: u16) -> bool {
    !(w >= 0xD800 && w <= 0xDFFF)
}

/// True iff `w` is in `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_valid_leading_surrogate(w: u16) -> bool {
    (w >> 10) == 0b11_0110
}

/// True iff `w` is in `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_valid_trailing_surrogate(w: u16) -> bool {
    (w >> 10) == 0b11_0111
}

/// True iff `lead`, `trail` form a surrogate pair.
#[inline]
#[must_use]
pub const fn is_valid_surrogate_pair(lead: u16, trail: u16) -> bool {
    is_valid_leading_surrogate(lead) && is_valid_trailing_surrogate(trail)
}

/// The `wwwwxxxxxx` bits of a leading surrogate.
///
/// Unspecified unless `is_valid_leading_surrogate(lead)`.
#[inline]
#[must_use]
pub const fn payload_leading_surrogate(lead: u16) -> u16 {
    lead & 0b0000_0011_1111_1111
}

/// The `xxxxxxxxxx` bits of a trailing surrogate.
///
/// Unspecified unless `is_valid_trailing_surrogate(trail)`.
#[inline]
#[must_use]
pub const fn payload_trailing_surrogate(trail: u16) -> u16 {
    trail & 0b0000_0011_1111_1111
}

/// The scalar value encoded by a surrogate pair.
///
/// The leading payload carries the plane minus one in its top four bits,
/// which is put back before the halves are joined.
///
/// Unspecified unless `is_valid_surrogate_pair(lead, trail)`.
#[inline]
#[must_use]
pub const fn combine_surrogate_pair(lead: u16, trail: u16) -> u32 {
    ((payload_leading_surrogate(lead) as u32) << 10 | payload_trailing_surrogate(trail) as u32)
        + 0x1_0000
}

/// 2 for scalar values at or above `0x10000`, 1 otherwise.
#[inline]
#[must_use]
pub const fn sequence_length_from_scalar_value(cp: u32) -> usize {
    if cp >= 0x1_0000 { 2 } else { 1 }
}

/// Length (1 or 2) of the well-formed sequence at the start of `s`, or
/// `None` if there is none.
#[must_use]
pub fn begins_with_valid_utf16(s: &[u16]) -> Option<usize> {
    match *s {
        [w, ..] if is_valid_single_word_scalar(w) => Some(1),
        [lead, trail, ..] if is_valid_surrogate_pair(lead, trail) => Some(2),
        _ => None,
    }
}

/// True iff `s` holds exactly one well-formed sequence and nothing else.
#[must_use]
pub fn is_valid_single_codepoint(s: &[u16]) -> bool {
    begins_with_valid_utf16(s) == Some(s.len())
}

/// The first complete well-formed sequence in `s`, or the empty slice at the
/// end of `s` if there is none.
#[must_use]
pub fn seek_to_first_valid_sequence(s: &[u16]) -> &[u16] {
    (0..s.len())
        .find_map(|i| begins_with_valid_utf16(&s[i..]).map(|n| &s[i..i + n]))
        .unwrap_or(&s[s.len()..])
}

/// The scalar value of the sequence at the start of `s`.
///
/// Unspecified unless `s` begins with a well-formed sequence.
#[must_use]
pub fn to_scalar_value(s: &[u16]) -> u32 {
    match *s {
        [lead, trail, ..] if is_valid_surrogate_pair(lead, trail) => {
            combine_surrogate_pair(lead, trail)
        }
        [w, ..] => u32::from(w),
        [] => 0,
    }
}

/// As [`begins_with_valid_utf16`], with every word byte-reversed first.
#[must_use]
pub fn begins_with_valid_utf16_swapped(s: &[u16]) -> Option<usize> {
    match *s {
        [] => None,
        [w] => begins_with_valid_utf16(&[reverse_bytes(w)]),
        [lead, trail, ..] => begins_with_valid_utf16(&[reverse_bytes(lead), reverse_bytes(trail)]),
    }
}

/// As [`to_scalar_value`], with every word byte-reversed first.
#[must_use]
pub fn to_scalar_value_swapped(s: &[u16]) -> u32 {
    match *s {
        [] => 0,
        [w] => to_scalar_value(&[reverse_bytes(w)]),
        [lead, trail, ..] => to_scalar_value(&[reverse_bytes(lead), reverse_bytes(trail)]),
    }
}
