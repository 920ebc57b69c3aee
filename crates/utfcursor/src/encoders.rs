//! Scalar value to code unit encoders (Unicode Tables 3-5 and 3-6).
//!
//! [`Utf8Encoder`] and [`Utf16Encoder`] hold the complete encoded form of a
//! single [`CodePoint`] in a fixed-size buffer and hand it out one unit at a
//! time:
//!
//! - [`remaining`](Utf8Encoder::remaining) reports how many units are left,
//!   and [`Iterator::next`] fetches the next one.
//! - [`write_all`](Utf8Encoder::write_all) emits every unit at once and is
//!   identical to stepping from the start.
//! - [`reset`](Utf8Encoder::reset) rewinds the step position.
//!
//! Only a validated [`CodePoint`] can be encoded. [`to_utf8`] and
//! [`to_utf16`] accept a raw `u32` and write nothing if it is not a scalar
//! value.
//!
//! # Panics
//!
//! None.

use core::iter::FusedIterator;

use crate::{
    CodePoint,
    byte_manip::reverse_bytes,
    low_level::{utf8, utf16},
};

/// The UTF-8 form of one scalar value.
///
/// ```rust
/// use utfcursor::{CodePoint, encode_utf8};
///
/// let euro = CodePoint::from('€');
/// assert_eq!(encode_utf8(euro).as_slice(), &[0xE2, 0x82, 0xAC]);
///
/// let mut enc = encode_utf8(euro);
/// assert_eq!(enc.remaining(), 3);
/// assert_eq!(enc.next(), Some(0xE2));
/// assert_eq!(enc.remaining(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf8Encoder {
    buf: [u8; 4],
    len: u8,
    pos: u8,
}

impl Utf8Encoder {
    /// Encodes `cp`.
    #[must_use]
    pub const fn new(cp: CodePoint) -> Self {
        let v = cp.get();
        let len = utf8::sequence_length_from_scalar_value(v);
        // Continuation bytes carry six payload bits each, filled from the
        // end; the leading byte gets the tag for `len` and what is left.
        let buf = match len {
            1 => [v as u8, 0, 0, 0],
            2 => [0xC0 | (v >> 6) as u8, 0x80 | (v & 0x3F) as u8, 0, 0],
            3 => [
                0xE0 | (v >> 12) as u8,
                0x80 | ((v >> 6) & 0x3F) as u8,
                0x80 | (v & 0x3F) as u8,
                0,
            ],
            _ => [
                0xF0 | (v >> 18) as u8,
                0x80 | ((v >> 12) & 0x3F) as u8,
                0x80 | ((v >> 6) & 0x3F) as u8,
                0x80 | (v & 0x3F) as u8,
            ],
        };
        Self {
            buf,
            len: len as u8,
            pos: 0,
        }
    }

    /// Units not yet returned by [`Iterator::next`].
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        (self.len - self.pos) as usize
    }

    /// The whole encoded sequence, independent of the step position.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Rewinds to the first unit.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Appends the whole encoded sequence to `out`.
    pub fn write_all<O: Extend<u8>>(&self, out: &mut O) {
        out.extend(self.as_slice().iter().copied());
    }
}

impl Iterator for Utf8Encoder {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos == self.len {
            return None;
        }
        let b = self.buf[self.pos as usize];
        self.pos += 1;
        Some(b)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Utf8Encoder {}
impl FusedIterator for Utf8Encoder {}

/// The UTF-16 form of one scalar value.
///
/// ```rust
/// use utfcursor::{CodePoint, encode_utf16};
///
/// let cp = CodePoint::try_from(0x10302).unwrap();
/// assert_eq!(encode_utf16(cp).collect::<Vec<_>>(), [0xD800, 0xDF02]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utf16Encoder {
    buf: [u16; 2],
    len: u8,
    pos: u8,
}

impl Utf16Encoder {
    /// Encodes `cp`.
    #[must_use]
    pub const fn new(cp: CodePoint) -> Self {
        let v = cp.get();
        if utf16::sequence_length_from_scalar_value(v) == 1 {
            return Self {
                buf: [v as u16, 0],
                len: 1,
                pos: 0,
            };
        }
        let v = v - 0x1_0000;
        Self {
            buf: [0xD800 | (v >> 10) as u16, 0xDC00 | (v & 0x3FF) as u16],
            len: 2,
            pos: 0,
        }
    }

    /// Units not yet returned by [`Iterator::next`].
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        (self.len - self.pos) as usize
    }

    /// The whole encoded sequence, independent of the step position.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.buf[..self.len as usize]
    }

    /// Rewinds to the first unit.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Appends the whole encoded sequence to `out`.
    pub fn write_all<O: Extend<u16>>(&self, out: &mut O) {
        out.extend(self.as_slice().iter().copied());
    }
}

impl Iterator for Utf16Encoder {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.pos == self.len {
            return None;
        }
        let w = self.buf[self.pos as usize];
        self.pos += 1;
        Some(w)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Utf16Encoder {}
impl FusedIterator for Utf16Encoder {}

/// Encodes `cp` as UTF-8.
#[inline]
#[must_use]
pub const fn encode_utf8(cp: CodePoint) -> Utf8Encoder {
    Utf8Encoder::new(cp)
}

/// Encodes `cp` as UTF-16.
#[inline]
#[must_use]
pub const fn encode_utf16(cp: CodePoint) -> Utf16Encoder {
    Utf16Encoder::new(cp)
}

/// The UTF-32 code unit for `cp`, which is its numeric value.
#[inline]
#[must_use]
pub const fn encode_utf32(cp: CodePoint) -> u32 {
    cp.get()
}

/// The UTF-32 code unit for `cp` in the opposite byte order.
#[inline]
#[must_use]
pub fn encode_utf32_swapped(cp: CodePoint) -> u32 {
    reverse_bytes(cp.get())
}

/// Appends the UTF-8 form of `v` to `out` and returns `true`, or returns
/// `false` without writing if `v` is not a scalar value.
///
/// ```rust
/// let mut out = Vec::new();
/// assert!(utfcursor::to_utf8(0x41, &mut out));
/// assert!(!utfcursor::to_utf8(0xD800, &mut out));
/// assert_eq!(out, b"A");
/// ```
pub fn to_utf8<O: Extend<u8>>(v: u32, out: &mut O) -> bool {
    match CodePoint::from_u32(v) {
        Some(cp) => {
            encode_utf8(cp).write_all(out);
            true
        }
        None => false,
    }
}

/// Appends the UTF-16 form of `v` to `out` and returns `true`, or returns
/// `false` without writing if `v` is not a scalar value.
pub fn to_utf16<O: Extend<u16>>(v: u32, out: &mut O) -> bool {
    match CodePoint::from_u32(v) {
        Some(cp) => {
            encode_utf16(cp).write_all(out);
            true
        }
        None => false,
    }
}
