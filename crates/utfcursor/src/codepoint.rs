use core::fmt;

use crate::error::InvalidScalarValue;

/// Returns true iff `v` is a Unicode scalar value, i.e. it falls on
/// `[0, 0xD7FF]` or `[0xE000, 0x10FFFF]`.
#[inline]
#[must_use]
pub const fn is_valid_scalar_value(v: u32) -> bool {
    v <= 0xD7FF || (v >= 0xE000 && v <= 0x10FFFF)
}

/// A Unicode scalar value.
///
/// A `CodePoint` can only be obtained from a value that passed
/// [`is_valid_scalar_value`], from a [`char`], or by decoding a well-formed
/// code unit sequence, so holders never need to re-validate it. Surrogates
/// (`0xD800..=0xDFFF`) are never representable on their own.
///
/// ```rust
/// use utfcursor::CodePoint;
///
/// let cp = CodePoint::try_from(0x10302).unwrap();
/// assert_eq!(cp.get(), 0x10302);
/// assert!(CodePoint::try_from(0xD800).is_err());
/// assert_eq!(cp.to_string(), "U+10302");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// U+0000 NULL.
    pub const NULL: Self = CodePoint(0);

    /// U+FFFD REPLACEMENT CHARACTER, the conventional rendering of an error
    /// run.
    pub const REPLACEMENT_CHARACTER: Self = CodePoint(0xFFFD);

    /// U+10FFFF, the largest scalar value.
    pub const MAX: Self = CodePoint(0x10FFFF);

    /// Returns `Some` iff `v` is a scalar value.
    #[inline]
    #[must_use]
    pub const fn from_u32(v: u32) -> Option<Self> {
        if is_valid_scalar_value(v) {
            Some(CodePoint(v))
        } else {
            None
        }
    }

    /// The numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The same scalar value as a [`char`].
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match char::from_u32(self.0) {
            Some(c) => c,
            // Unreachable: every CodePoint is a scalar value.
            None => char::REPLACEMENT_CHARACTER,
        }
    }

    /// Number of bytes in the UTF-8 encoding (1–4).
    #[inline]
    #[must_use]
    pub const fn utf8_len(self) -> usize {
        crate::low_level::utf8::sequence_length_from_scalar_value(self.0)
    }

    /// Number of words in the UTF-16 encoding (1 or 2).
    #[inline]
    #[must_use]
    pub const fn utf16_len(self) -> usize {
        crate::low_level::utf16::sequence_length_from_scalar_value(self.0)
    }
}

impl Default for CodePoint {
    fn default() -> Self {
        Self::NULL
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = InvalidScalarValue;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        Self::from_u32(v).ok_or(InvalidScalarValue(v))
    }
}

impl From<char> for CodePoint {
    #[inline]
    fn from(c: char) -> Self {
        CodePoint(c as u32)
    }
}

impl From<CodePoint> for u32 {
    #[inline]
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl From<CodePoint> for char {
    #[inline]
    fn from(cp: CodePoint) -> Self {
        cp.to_char()
    }
}

impl PartialEq<u32> for CodePoint {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodePoint({self})")
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CodePoint {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CodePoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        CodePoint::try_from(v).map_err(serde::de::Error::custom)
    }
}
