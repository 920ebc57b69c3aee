//! Single-pass, allocation-free well-formedness checks.

use crate::{
    cursor::Encoding,
    error::Utf8Error,
    low_level::utf8::{begins_with_valid_utf8, is_valid_leading_byte, maximal_subpart_len},
};

/// Checks that `bytes` is well-formed UTF-8 (Table 3-7).
///
/// # Errors
///
/// Returns the offset of the first ill-formed subsequence and the length of
/// its maximal subpart, or `error_len() == None` when the buffer ends in
/// the middle of a sequence that was well-formed so far.
///
/// ```rust
/// use utfcursor::validate_utf8;
///
/// assert!(validate_utf8(b"\r\n\xC3\xA9").is_ok());
///
/// let err = validate_utf8(&[0x0D, 0x0A, 0xC3, 0x28]).unwrap_err();
/// assert_eq!(err.valid_up_to(), 2);
/// assert_eq!(err.error_len(), Some(1));
///
/// let err = validate_utf8(&[0x41, 0xF0, 0x9F, 0x98]).unwrap_err();
/// assert_eq!(err.valid_up_to(), 1);
/// assert_eq!(err.error_len(), None);
/// ```
pub fn validate_utf8(bytes: &[u8]) -> Result<(), Utf8Error> {
    let mut pos = 0;
    while let Some(rest) = bytes.get(pos..).filter(|rest| !rest.is_empty()) {
        if let Some(n) = begins_with_valid_utf8(rest) {
            pos += n;
            continue;
        }
        let subpart = maximal_subpart_len(rest);
        let truncated = subpart == rest.len() && is_valid_leading_byte(rest[0]);
        #[cfg(feature = "tracing")]
        tracing::trace!(offset = pos, subpart, truncated, "ill-formed utf-8");
        return Err(Utf8Error {
            valid_up_to: pos,
            // A maximal subpart is at most three bytes.
            error_len: (!truncated).then_some(subpart as u8),
        });
    }
    Ok(())
}

/// True iff `bytes` is well-formed UTF-8.
///
/// ```rust
/// assert!(utfcursor::utfchk("ŝ€\u{10302}".as_bytes()));
/// assert!(!utfcursor::utfchk(&[0xE2, 0x28, 0xA1]));
/// assert!(!utfcursor::utfchk(&[0xED, 0xA0, 0x80]));
/// ```
#[must_use]
pub fn utfchk(bytes: &[u8]) -> bool {
    validate_utf8(bytes).is_ok()
}

/// True iff `units` is a concatenation of well-formed sequences in
/// encoding `E`.
///
/// ```rust
/// use utfcursor::{Utf16, Utf32Swapped, is_well_formed};
///
/// assert!(is_well_formed::<Utf16>(&[0x41, 0xD800, 0xDF02]));
/// assert!(!is_well_formed::<Utf16>(&[0xDF02, 0xD800]));
/// assert!(is_well_formed::<Utf32Swapped>(&[0x4100_0000]));
/// ```
#[must_use]
pub fn is_well_formed<E: Encoding>(units: &[E::Unit]) -> bool {
    let mut pos = 0;
    while pos < units.len() {
        match E::valid_sequence_len(&units[pos..]) {
            Some(n) => pos += n,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(offset = pos, "ill-formed code unit sequence");
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;
    use crate::cursor::{Utf8, Utf16, Utf32};

    #[rstest]
    #[case(&[0xC3, 0x28], 0, Some(1))]
    #[case(&[0x0D, 0x0A, 0xC3, 0x28], 2, Some(1))]
    #[case(&[0xE2, 0x28, 0xA1], 0, Some(1))]
    #[case(&[0xE2, 0xA1, 0x28], 0, Some(2))]
    #[case(&[0xF0, 0x28, 0x8C, 0xBC], 0, Some(1))]
    #[case(&[0xF0, 0x8C, 0xBC, 0x28], 0, Some(1))]
    #[case(&[0x0D, 0x0A, 0xF0, 0x8C, 0xBC, 0x28], 2, Some(1))]
    #[case(&[0xF0, 0x90, 0x8C], 0, None)]
    #[case(&[0x41, 0xC0, 0x80], 1, Some(1))]
    #[case(&[0x41, 0xFF], 1, Some(1))]
    fn rejects(#[case] bytes: &[u8], #[case] valid_up_to: usize, #[case] error_len: Option<usize>) {
        let err = validate_utf8(bytes).unwrap_err();
        assert_eq!(err.valid_up_to(), valid_up_to);
        assert_eq!(err.error_len(), error_len);
        assert!(!utfchk(bytes));
        assert!(!is_well_formed::<Utf8>(bytes));
    }

    #[rstest]
    #[case(&[])]
    #[case(b"hello")]
    #[case(&[0xC3, 0xB1])]
    #[case(&[0xE2, 0x82, 0xA1])]
    #[case(&[0xF0, 0x90, 0x8C, 0xBC])]
    #[case(&[0xEF, 0xBB, 0xBF, 0x41])]
    fn accepts(#[case] bytes: &[u8]) {
        assert_eq!(validate_utf8(bytes), Ok(()));
        assert!(utfchk(bytes));
    }

    #[test]
    fn generic_well_formedness() {
        assert!(is_well_formed::<Utf16>(&[]));
        assert!(is_well_formed::<Utf16>(&[0x004D, 0x0430, 0x4E8C, 0xD800, 0xDF02]));
        assert!(!is_well_formed::<Utf16>(&[0x004D, 0xD800]));
        assert!(is_well_formed::<Utf32>(&[0x10FFFF, 0]));
        assert!(!is_well_formed::<Utf32>(&[0x41, 0xDFFF]));
    }

    #[quickcheck]
    fn agrees_with_core_str(bytes: Vec<u8>) -> bool {
        match (validate_utf8(&bytes), core::str::from_utf8(&bytes)) {
            (Ok(()), Ok(_)) => true,
            (Err(ours), Err(theirs)) => {
                ours.valid_up_to() == theirs.valid_up_to() && ours.error_len() == theirs.error_len()
            }
            _ => false,
        }
    }
}
