use core::fmt;

use crate::{
    CodePoint,
    low_level::{utf8, utf16, utf32},
};

/// An encoding form, described by the handful of predicates the traversal
/// engine needs.
///
/// Implementations are uninhabited marker types; the engine never holds a
/// value of one.
pub trait Encoding {
    /// The code unit: `u8`, `u16` or `u32`.
    type Unit: Copy + Eq + fmt::Debug + 'static;

    /// Longest well-formed sequence, in units.
    const MAX_SEQUENCE_LEN: usize;

    /// Length of the well-formed sequence at the start of `units`, if any.
    fn valid_sequence_len(units: &[Self::Unit]) -> Option<usize>;

    /// Length of the maximal subpart at the start of `units`: at least 1
    /// unless `units` is empty.
    ///
    /// Only UTF-8 has multi-unit subparts; every other form reports one unit.
    fn maximal_subpart_len(units: &[Self::Unit]) -> usize {
        usize::from(!units.is_empty())
    }

    /// False iff `unit` may be absorbed into a block that started earlier,
    /// either as the tail of a well-formed sequence or of a maximal subpart.
    fn can_begin_sequence(unit: Self::Unit) -> bool;

    /// The scalar value of the well-formed sequence `sequence`.
    ///
    /// Unspecified (but never a panic) unless `sequence` begins with a
    /// well-formed sequence.
    fn decode(sequence: &[Self::Unit]) -> CodePoint;
}

fn to_code_point(v: u32) -> CodePoint {
    CodePoint::from_u32(v).unwrap_or(CodePoint::REPLACEMENT_CHARACTER)
}

/// UTF-8 (Table 3-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utf8 {}

impl Encoding for Utf8 {
    type Unit = u8;

    const MAX_SEQUENCE_LEN: usize = 4;

    #[inline]
    fn valid_sequence_len(units: &[u8]) -> Option<usize> {
        utf8::begins_with_valid_utf8(units)
    }

    #[inline]
    fn maximal_subpart_len(units: &[u8]) -> usize {
        utf8::maximal_subpart_len(units)
    }

    #[inline]
    fn can_begin_sequence(unit: u8) -> bool {
        !utf8::is_trailing_byte(unit)
    }

    #[inline]
    fn decode(sequence: &[u8]) -> CodePoint {
        to_code_point(utf8::to_scalar_value(sequence))
    }
}

/// UTF-16 in host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utf16 {}

impl Encoding for Utf16 {
    type Unit = u16;

    const MAX_SEQUENCE_LEN: usize = 2;

    #[inline]
    fn valid_sequence_len(units: &[u16]) -> Option<usize> {
        utf16::begins_with_valid_utf16(units)
    }

    #[inline]
    fn can_begin_sequence(unit: u16) -> bool {
        !utf16::is_valid_trailing_surrogate(unit)
    }

    #[inline]
    fn decode(sequence: &[u16]) -> CodePoint {
        to_code_point(utf16::to_scalar_value(sequence))
    }
}

/// UTF-16 in the opposite of host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utf16Swapped {}

impl Encoding for Utf16Swapped {
    type Unit = u16;

    const MAX_SEQUENCE_LEN: usize = 2;

    #[inline]
    fn valid_sequence_len(units: &[u16]) -> Option<usize> {
        utf16::begins_with_valid_utf16_swapped(units)
    }

    #[inline]
    fn can_begin_sequence(unit: u16) -> bool {
        !utf16::is_valid_trailing_surrogate(unit.swap_bytes())
    }

    #[inline]
    fn decode(sequence: &[u16]) -> CodePoint {
        to_code_point(utf16::to_scalar_value_swapped(sequence))
    }
}

/// UTF-32 in host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utf32 {}

impl Encoding for Utf32 {
    type Unit = u32;

    const MAX_SEQUENCE_LEN: usize = 1;

    #[inline]
    fn valid_sequence_len(units: &[u32]) -> Option<usize> {
        utf32::begins_with_valid_utf32(units)
    }

    #[inline]
    fn can_begin_sequence(_: u32) -> bool {
        true
    }

    #[inline]
    fn decode(sequence: &[u32]) -> CodePoint {
        to_code_point(sequence.first().copied().unwrap_or(0))
    }
}

/// UTF-32 in the opposite of host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utf32Swapped {}

impl Encoding for Utf32Swapped {
    type Unit = u32;

    const MAX_SEQUENCE_LEN: usize = 1;

    #[inline]
    fn valid_sequence_len(units: &[u32]) -> Option<usize> {
        utf32::begins_with_valid_utf32_swapped(units)
    }

    #[inline]
    fn can_begin_sequence(_: u32) -> bool {
        true
    }

    #[inline]
    fn decode(sequence: &[u32]) -> CodePoint {
        to_code_point(sequence.first().map_or(0, |u| u.swap_bytes()))
    }
}

/// UTF-16LE: [`Utf16`] on little-endian hosts.
#[cfg(target_endian = "little")]
pub type Utf16Le = Utf16;
/// UTF-16BE: [`Utf16Swapped`] on little-endian hosts.
#[cfg(target_endian = "little")]
pub type Utf16Be = Utf16Swapped;
/// UTF-32LE: [`Utf32`] on little-endian hosts.
#[cfg(target_endian = "little")]
pub type Utf32Le = Utf32;
/// UTF-32BE: [`Utf32Swapped`] on little-endian hosts.
#[cfg(target_endian = "little")]
pub type Utf32Be = Utf32Swapped;

/// UTF-16LE: [`Utf16Swapped`] on big-endian hosts.
#[cfg(target_endian = "big")]
pub type Utf16Le = Utf16Swapped;
/// UTF-16BE: [`Utf16`] on big-endian hosts.
#[cfg(target_endian = "big")]
pub type Utf16Be = Utf16;
/// UTF-32LE: [`Utf32Swapped`] on big-endian hosts.
#[cfg(target_endian = "big")]
pub type Utf32Le = Utf32Swapped;
/// UTF-32BE: [`Utf32`] on big-endian hosts.
#[cfg(target_endian = "big")]
pub type Utf32Be = Utf32;
