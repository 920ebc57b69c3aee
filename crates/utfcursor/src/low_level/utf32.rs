//! UTF-32 code unit primitives, in native and byte-swapped order.
//!
//! Every well-formed UTF-32 sequence is exactly one unit long, so these are
//! thin wrappers around [`is_valid_scalar_value`].

use crate::{byte_manip::reverse_bytes, codepoint::is_valid_scalar_value};

/// True iff `u` is a scalar value.
#[inline]
#[must_use]
pub const fn is_valid_code_unit(u: u32) -> bool {
    is_valid_scalar_value(u)
}

/// True iff `u`, with its bytes reversed, is a scalar value.
#[inline]
#[must_use]
pub fn is_valid_code_unit_swapped(u: u32) -> bool {
    is_valid_scalar_value(reverse_bytes(u))
}

/// `Some(1)` iff the first unit of `s` is a scalar value.
#[inline]
#[must_use]
pub fn begins_with_valid_utf32(s: &[u32]) -> Option<usize> {
    s.first().filter(|&&u| is_valid_code_unit(u)).map(|_| 1)
}

/// `Some(1)` iff the first unit of `s` is a byte-swapped scalar value.
#[inline]
#[must_use]
pub fn begins_with_valid_utf32_swapped(s: &[u32]) -> Option<usize> {
    s.first()
        .filter(|&&u| is_valid_code_unit_swapped(u))
        .map(|_| 1)
}

/// The first valid unit of `s` as a one-element slice, or the empty slice at
/// the end of `s`.
#[must_use]
pub fn seek_to_first_valid_sequence(s: &[u32]) -> &[u32] {
    seek_by(s, is_valid_code_unit)
}

/// As [`seek_to_first_valid_sequence`], for byte-swapped units.
#[must_use]
pub fn seek_to_first_valid_sequence_swapped(s: &[u32]) -> &[u32] {
    seek_by(s, is_valid_code_unit_swapped)
}

fn seek_by(s: &[u32], valid: impl Fn(u32) -> bool) -> &[u32] {
    match s.iter().position(|&u| valid(u)) {
        Some(i) => &s[i..=i],
        None => &s[s.len()..],
    }
}
