//! Whole-buffer decoding and encoding.

use alloc::vec::Vec;

use crate::{
    CodePoint, DecodeOptions, Substitution,
    cursor::{Cursor, Encoding, MaximalRun, PerUnit, SubstitutionPolicy},
    encoders::{encode_utf8, encode_utf16, encode_utf32},
};

/// One entry per block of `units`: the scalar value of a well-formed
/// sequence, or `None` for an error block.
///
/// ```rust
/// use utfcursor::{CodePoint, MaximalRun, PerUnit, Utf8, decode_all};
///
/// let bytes = [0xE2, 0x28, 0xA1];
/// let run = decode_all::<Utf8, MaximalRun>(&bytes);
/// assert_eq!(run, [None, Some(CodePoint::from('(')), None]);
///
/// let table_3_11 = [0xE1, 0x80, 0xE2, 0xF0, 0x91, 0x92, 0xF1, 0xBF, 0x41];
/// assert_eq!(decode_all::<Utf8, MaximalRun>(&table_3_11).len(), 2);
/// assert_eq!(decode_all::<Utf8, PerUnit>(&table_3_11).len(), 5);
/// ```
#[must_use]
pub fn decode_all<E: Encoding, P: SubstitutionPolicy>(units: &[E::Unit]) -> Vec<Option<CodePoint>> {
    let decoded: Vec<Option<CodePoint>> = Cursor::<E, P>::new(units)
        .segments()
        .map(|segment| segment.codepoint)
        .collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(
        units = units.len(),
        blocks = decoded.len(),
        errors = decoded.iter().filter(|cp| cp.is_none()).count(),
        "decoded buffer"
    );
    decoded
}

/// Decodes `units`, rendering each error block as
/// [`DecodeOptions::replacement`].
#[must_use]
pub fn decode_lossy<E: Encoding>(units: &[E::Unit], options: &DecodeOptions) -> Vec<CodePoint> {
    let decoded = match options.substitution {
        Substitution::MaximalRun => decode_all::<E, MaximalRun>(units),
        Substitution::PerUnit => decode_all::<E, PerUnit>(units),
    };
    #[cfg(feature = "tracing")]
    let mut substituted = 0usize;
    let mut out = Vec::with_capacity(decoded.len());
    for cp in decoded {
        match cp {
            Some(cp) => out.push(cp),
            None => {
                #[cfg(feature = "tracing")]
                {
                    substituted += 1;
                }
                out.extend(options.replacement);
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        substitution = ?options.substitution,
        substituted,
        "lossy decode"
    );
    out
}

/// Concatenated UTF-8 encoding of `cps`.
#[must_use]
pub fn encode_utf8_all(cps: &[CodePoint]) -> Vec<u8> {
    let mut out = Vec::with_capacity(cps.len());
    for &cp in cps {
        encode_utf8(cp).write_all(&mut out);
    }
    out
}

/// Concatenated UTF-16 encoding of `cps`.
#[must_use]
pub fn encode_utf16_all(cps: &[CodePoint]) -> Vec<u16> {
    let mut out = Vec::with_capacity(cps.len());
    for &cp in cps {
        encode_utf16(cp).write_all(&mut out);
    }
    out
}

/// UTF-32 encoding of `cps`.
#[must_use]
pub fn encode_utf32_all(cps: &[CodePoint]) -> Vec<u32> {
    cps.iter().copied().map(encode_utf32).collect()
}
