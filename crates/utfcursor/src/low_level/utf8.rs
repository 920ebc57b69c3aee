//! UTF-8 byte classification and sequence primitives (Unicode §3.9,
//! Tables 3-6 and 3-7).

/// True for `0x00..=0x7F` and `0xC2..=0xF4`, the union of the "First Byte"
/// column of Table 3-7.
#[inline]
#[must_use]
pub const fn is_valid_leading_byte(b: u8) -> bool {
    b <= 0x7F || (b >= 0xC2 && b <= 0xF4)
}

/// True for `0x80..=0xBF`.
///
/// A byte outside this range can never continue a sequence. A byte inside
/// it might, subject to the leading-byte specific second-byte ranges of
/// Table 3-7.
#[inline]
#[must_use]
pub const fn is_trailing_byte(b: u8) -> bool {
    (b & 0b1100_0000) == 0b1000_0000
}

/// Number of bytes in the sequence announced by the leading byte `b`.
///
/// Unspecified (but in `1..=4`) unless `is_valid_leading_byte(b)`.
#[inline]
#[must_use]
pub const fn sequence_length_from_leading_byte(b: u8) -> usize {
    if (b & 0b1000_0000) == 0 {
        1
    } else if (b & 0b1110_0000) == 0b1100_0000 {
        2
    } else if (b & 0b1111_0000) == 0b1110_0000 {
        3
    } else {
        4
    }
}

/// Number of bytes needed to encode the scalar value `cp`.
///
/// Unspecified unless `cp` is a scalar value.
#[inline]
#[must_use]
pub const fn sequence_length_from_scalar_value(cp: u32) -> usize {
    if cp <= 0x7F {
        1
    } else if cp <= 0x7FF {
        2
    } else if cp <= 0xFFFF {
        3
    } else {
        4
    }
}

/// True if `tb` falls in the "Second Byte" range of the Table 3-7 row
/// selected by the leading byte `lb`.
///
/// Unspecified unless `is_valid_leading_byte(lb)`. A single-byte leading
/// byte has no second byte, so the answer for it is `false`.
#[must_use]
pub const fn is_valid_second_byte(tb: u8, lb: u8) -> bool {
    match lb {
        0x00..=0x7F => false,
        0xE0 => tb >= 0xA0 && tb <= 0xBF,
        0xED => tb >= 0x80 && tb <= 0x9F,
        0xF0 => tb >= 0x90 && tb <= 0xBF,
        0xF4 => tb >= 0x80 && tb <= 0x8F,
        _ => tb >= 0x80 && tb <= 0xBF,
    }
}

/// True for `0x80..=0xBF`. Third and fourth bytes never depend on the
/// leading byte.
#[inline]
#[must_use]
pub const fn is_valid_third_or_fourth_byte(b: u8) -> bool {
    b >= 0x80 && b <= 0xBF
}

/// Value bits of a leading byte, given `len ==
/// sequence_length_from_leading_byte(b)`.
#[inline]
#[must_use]
pub const fn payload_leading_byte(b: u8, len: usize) -> u8 {
    match len {
        1 => b & 0x7F,
        2 => b & 0x1F,
        3 => b & 0x0F,
        _ => b & 0x07,
    }
}

/// Value bits of a continuation byte.
#[inline]
#[must_use]
pub const fn payload_trailing_byte(b: u8) -> u8 {
    b & 0x3F
}

/// How far the sequence announced by `s[0]` stays consistent with Table
/// 3-7, and how long it was announced to be.
///
/// `(0, 0)` for an empty slice, `(0, 1)` for an invalid leading byte.
fn scan(s: &[u8]) -> (usize, usize) {
    let Some(&lb) = s.first() else {
        return (0, 0);
    };
    if !is_valid_leading_byte(lb) {
        return (0, 1);
    }
    let expected = sequence_length_from_leading_byte(lb);
    let mut n = 1;
    while n < expected {
        let Some(&b) = s.get(n) else {
            break;
        };
        let ok = if n == 1 {
            is_valid_second_byte(b, lb)
        } else {
            is_valid_third_or_fourth_byte(b)
        };
        if !ok {
            break;
        }
        n += 1;
    }
    (n, expected)
}

/// Returns the length of the well-formed sequence at the start of `s`, or
/// `None` if the leading byte is invalid, `s` is shorter than the announced
/// length, or a continuation byte is out of its positional range.
///
/// ```rust
/// use utfcursor::low_level::utf8::begins_with_valid_utf8;
///
/// assert_eq!(begins_with_valid_utf8(&[0xE2, 0x82, 0xAC, 0x41]), Some(3));
/// assert_eq!(begins_with_valid_utf8(&[0xE2, 0x28, 0xA1]), None);
/// assert_eq!(begins_with_valid_utf8(&[]), None);
/// ```
#[must_use]
pub fn begins_with_valid_utf8(s: &[u8]) -> Option<usize> {
    let (n, expected) = scan(s);
    (n > 0 && n == expected).then_some(n)
}

/// Length of the maximal subpart at the start of `s`: the longest prefix
/// that is consistent with some well-formed sequence, but never less than
/// one byte unless `s` is empty.
///
/// When `s` begins with a well-formed sequence this is its length.
///
/// ```rust
/// use utfcursor::low_level::utf8::maximal_subpart_len;
///
/// // Table 3-11: E1 80 | E2 | F0 91 92 | F1 BF | 41
/// assert_eq!(maximal_subpart_len(&[0xE1, 0x80, 0xE2]), 2);
/// assert_eq!(maximal_subpart_len(&[0xE2, 0xF0]), 1);
/// assert_eq!(maximal_subpart_len(&[0xF0, 0x91, 0x92, 0xF1]), 3);
/// assert_eq!(maximal_subpart_len(&[0xF1, 0xBF, 0x41]), 2);
/// ```
#[must_use]
pub fn maximal_subpart_len(s: &[u8]) -> usize {
    if s.is_empty() {
        return 0;
    }
    scan(s).0.max(1)
}

/// True iff `s` holds exactly one well-formed sequence and nothing else.
#[must_use]
pub fn is_valid_single_codepoint(s: &[u8]) -> bool {
    begins_with_valid_utf8(s) == Some(s.len())
}

/// Offset and announced length of the first valid leading byte in `s` whose
/// announced sequence fits in the remaining bytes. Continuation bytes are
/// not examined.
#[must_use]
pub fn seek_to_first_leading_byte(s: &[u8]) -> Option<(usize, usize)> {
    s.iter().enumerate().find_map(|(i, &b)| {
        let len = sequence_length_from_leading_byte(b);
        (is_valid_leading_byte(b) && len <= s.len() - i).then_some((i, len))
    })
}

/// The first complete well-formed sequence in `s`.
///
/// Starts at offset 0 iff `s` begins with a well-formed sequence. When there
/// is none the result is the empty slice at the end of `s`, so callers tell
/// the cases apart by comparing the returned offset against 0 and
/// `s.len()`.
#[must_use]
pub fn seek_to_first_valid_sequence(s: &[u8]) -> &[u8] {
    let mut i = 0;
    while let Some((offset, _)) = seek_to_first_leading_byte(&s[i..]) {
        let start = i + offset;
        if let Some(n) = begins_with_valid_utf8(&s[start..]) {
            return &s[start..start + n];
        }
        i = start + 1;
    }
    &s[s.len()..]
}

/// Assembles the scalar value from the payload bits of the sequence at the
/// start of `s`.
///
/// Unspecified unless `s` begins with a well-formed sequence.
#[must_use]
pub fn to_scalar_value(s: &[u8]) -> u32 {
    let Some(&lb) = s.first() else {
        return 0;
    };
    let len = sequence_length_from_leading_byte(lb);
    s.iter()
        .take(len)
        .skip(1)
        .fold(u32::from(payload_leading_byte(lb, len)), |acc, &b| {
            (acc << 6) | u32::from(payload_trailing_byte(b))
        })
}
