//! Validation, decoding, encoding and bidirectional traversal of UTF-8,
//! UTF-16 and UTF-32 code unit buffers, following Unicode §3.9.
//!
//! - [`low_level`]: total per-encoding predicates (Tables 3-5 to 3-7).
//! - [`encode_utf8`] and [`encode_utf16`]: scalar value to code units.
//! - [`EncodedView`]: a span proven to hold exactly one well-formed
//!   sequence.
//! - [`Cursor`]: steps forwards and backwards over a buffer that may be
//!   ill-formed, cutting error runs per a [`SubstitutionPolicy`].
//! - [`validate_utf8`], [`is_well_formed`], [`decode_all`] and
//!   [`decode_lossy`]: whole-buffer helpers.
//!
//! ```rust
//! use utfcursor::{CodePoint, Utf16Cursor};
//!
//! let words = [0x004D, 0xD800, 0xDF02, 0xDC00];
//! let mut cursor = Utf16Cursor::at_end(&words);
//!
//! assert!(cursor.go_prev());
//! assert_eq!(cursor.get_codepoint(), None);
//! assert_eq!(cursor.get_underlying(), &[0xDC00]);
//!
//! assert!(cursor.go_prev());
//! assert_eq!(cursor.get_codepoint(), CodePoint::from_u32(0x10302));
//!
//! assert!(cursor.go_prev());
//! assert!(cursor.at_start());
//! assert!(!cursor.go_prev());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod byte_manip;
mod codepoint;
mod cursor;
mod encoders;
mod error;
pub mod low_level;
mod options;
mod transcode;
mod validate;
mod view;

#[cfg(test)]
mod tests;

pub use byte_manip::{ReverseBytes, reverse_bytes};
pub use codepoint::{CodePoint, is_valid_scalar_value};
pub use cursor::{
    Cursor, Encoding, MaximalRun, PerUnit, Segment, Segments, SubstitutionPolicy, Utf8,
    Utf8Cursor, Utf8CursorAlt, Utf16, Utf16Be, Utf16BeCursor, Utf16Cursor, Utf16CursorAlt,
    Utf16Le, Utf16LeCursor, Utf16Swapped, Utf16SwappedCursor, Utf16SwappedCursorAlt, Utf32,
    Utf32Be, Utf32BeCursor, Utf32Cursor, Utf32CursorAlt, Utf32Le, Utf32LeCursor, Utf32Swapped,
    Utf32SwappedCursor, Utf32SwappedCursorAlt,
};
pub use encoders::{
    Utf8Encoder, Utf16Encoder, encode_utf8, encode_utf16, encode_utf32, encode_utf32_swapped,
    to_utf8, to_utf16,
};
pub use error::{InvalidScalarValue, Utf8Error, ViewError};
pub use options::{DecodeOptions, Substitution};
pub use transcode::{decode_all, decode_lossy, encode_utf8_all, encode_utf16_all, encode_utf32_all};
pub use validate::{is_well_formed, utfchk, validate_utf8};
pub use view::{
    EncodedView, Utf8View, Utf16SwappedView, Utf16View, Utf32SwappedView, Utf32View,
};
