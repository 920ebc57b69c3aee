use thiserror::Error;

/// A `u32` that is not a Unicode scalar value was offered where a
/// [`CodePoint`](crate::CodePoint) is required.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{0:#X} is not a unicode scalar value")]
pub struct InvalidScalarValue(
    /// The rejected value.
    pub u32,
);

/// Why a span was rejected by an encoded-view factory.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Views always cover at least one code unit.
    #[error("empty span")]
    Empty,
    /// No well-formed sequence at the start of the span.
    #[error("span does not begin with a well-formed code unit sequence")]
    IllFormed,
    /// The span begins with a well-formed sequence but continues past it.
    #[error("span holds {actual} code units but the encoded scalar value occupies {expected}")]
    TrailingUnits {
        /// Length of the leading well-formed sequence.
        expected: usize,
        /// Length of the offered span.
        actual: usize,
    },
}

/// The first ill-formed subsequence found by
/// [`validate_utf8`](crate::validate_utf8).
///
/// Mirrors the shape of [`core::str::Utf8Error`] so that callers can resume
/// after skipping the offending bytes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("ill-formed utf-8 at byte offset {valid_up_to}")]
pub struct Utf8Error {
    pub(crate) valid_up_to: usize,
    pub(crate) error_len: Option<u8>,
}

impl Utf8Error {
    /// Length of the well-formed prefix of the buffer.
    #[must_use]
    pub const fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Length of the maximal subpart starting at [`Self::valid_up_to`], or
    /// `None` if the buffer ended inside a sequence that was well-formed so
    /// far.
    #[must_use]
    pub const fn error_len(&self) -> Option<usize> {
        match self.error_len {
            Some(n) => Some(n as usize),
            None => None,
        }
    }
}
