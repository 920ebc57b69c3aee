use core::{fmt, marker::PhantomData};

use crate::{
    CodePoint,
    cursor::{Encoding, Utf8, Utf16, Utf16Swapped, Utf32, Utf32Swapped},
    error::ViewError,
};

/// A span holding exactly one well-formed sequence in encoding `E`.
///
/// The only way to obtain one is a successful validation, either
/// [`try_from_span`](Self::try_from_span) or a cursor positioned on a
/// well-formed sequence, so [`to_codepoint`](Self::to_codepoint) never has to
/// check again.
///
/// ```rust
/// use utfcursor::{Utf8View, ViewError};
///
/// let view = Utf8View::try_from_span(&[0xE2, 0x82, 0xAC]).unwrap();
/// assert_eq!(view.to_codepoint().to_char(), '€');
///
/// assert_eq!(Utf8View::try_from_span(&[0xE2, 0x82]), Err(ViewError::IllFormed));
/// assert_eq!(
///     Utf8View::try_from_span(b"ab"),
///     Err(ViewError::TrailingUnits { expected: 1, actual: 2 })
/// );
/// ```
pub struct EncodedView<'a, E: Encoding> {
    units: &'a [E::Unit],
    _encoding: PhantomData<E>,
}

/// A view over one UTF-8 sequence.
pub type Utf8View<'a> = EncodedView<'a, Utf8>;
/// A view over one UTF-16 sequence.
pub type Utf16View<'a> = EncodedView<'a, Utf16>;
/// A view over one byte-swapped UTF-16 sequence.
pub type Utf16SwappedView<'a> = EncodedView<'a, Utf16Swapped>;
/// A view over one UTF-32 unit.
pub type Utf32View<'a> = EncodedView<'a, Utf32>;
/// A view over one byte-swapped UTF-32 unit.
pub type Utf32SwappedView<'a> = EncodedView<'a, Utf32Swapped>;

impl<'a, E: Encoding> EncodedView<'a, E> {
    /// Accepts `span` iff it is exactly one well-formed sequence.
    ///
    /// # Errors
    ///
    /// - [`ViewError::Empty`] for an empty span.
    /// - [`ViewError::IllFormed`] if no well-formed sequence starts the span.
    /// - [`ViewError::TrailingUnits`] if one does but the span is longer.
    pub fn try_from_span(span: &'a [E::Unit]) -> Result<Self, ViewError> {
        if span.is_empty() {
            return Err(ViewError::Empty);
        }
        match E::valid_sequence_len(span) {
            None => Err(ViewError::IllFormed),
            Some(n) if n == span.len() => Ok(Self::from_valid(span)),
            Some(expected) => Err(ViewError::TrailingUnits {
                expected,
                actual: span.len(),
            }),
        }
    }

    /// Callers have already checked that `span` is exactly one well-formed
    /// sequence.
    pub(crate) fn from_valid(span: &'a [E::Unit]) -> Self {
        Self {
            units: span,
            _encoding: PhantomData,
        }
    }

    /// The code units of the sequence.
    #[inline]
    #[must_use]
    pub fn as_units(&self) -> &'a [E::Unit] {
        self.units
    }

    /// The encoded scalar value.
    #[inline]
    #[must_use]
    pub fn to_codepoint(&self) -> CodePoint {
        E::decode(self.units)
    }
}

impl<E: Encoding> Clone for EncodedView<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for EncodedView<'_, E> {}

impl<E: Encoding> PartialEq for EncodedView<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.units == other.units
    }
}

impl<E: Encoding> Eq for EncodedView<'_, E> {}

impl<E: Encoding> fmt::Debug for EncodedView<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedView")
            .field("units", &self.units)
            .field("codepoint", &self.to_codepoint())
            .finish()
    }
}

impl<E: Encoding> From<EncodedView<'_, E>> for CodePoint {
    fn from(view: EncodedView<'_, E>) -> Self {
        view.to_codepoint()
    }
}
