//! Bidirectional traversal over code unit buffers that may be ill-formed.
//!
//! A [`Cursor`] splits its buffer into blocks, each of which is either one
//! well-formed sequence or one error, and sits on a block boundary. How
//! ill-formed runs are split is chosen by the [`SubstitutionPolicy`]:
//!
//! - [`MaximalRun`]: a whole ill-formed run is one error.
//! - [`PerUnit`]: one error per maximal subpart (Unicode Table 3-11).
//!
//! Moving forward and moving backward always visit the same boundaries.
//!
//! ```rust
//! use utfcursor::{Utf8Cursor, Utf8CursorAlt};
//!
//! let bytes = [0x61, 0xF1, 0x80, 0x80, 0xE1, 0x80, 0xC2, 0x62];
//!
//! let mut cursor = Utf8Cursor::new(&bytes);
//! let mut blocks = Vec::new();
//! while !cursor.is_finished() {
//!     blocks.push(cursor.get_codepoint().map(|cp| cp.to_char()));
//!     cursor.go_next();
//! }
//! assert_eq!(blocks, [Some('a'), None, Some('b')]);
//!
//! let alt = Utf8CursorAlt::new(&bytes);
//! assert_eq!(alt.segments().count(), 5);
//! ```

mod encoding;
mod policy;

use core::{fmt, iter::FusedIterator, marker::PhantomData};

pub use encoding::{
    Encoding, Utf8, Utf16, Utf16Be, Utf16Le, Utf16Swapped, Utf32, Utf32Be, Utf32Le, Utf32Swapped,
};
pub use policy::{MaximalRun, PerUnit, SubstitutionPolicy};

use crate::{CodePoint, view::EncodedView};

/// A position on a block boundary of a borrowed code unit buffer.
///
/// The cursor never reads outside its buffer and every step makes progress,
/// so a walk in either direction always terminates.
pub struct Cursor<'a, E: Encoding, P: SubstitutionPolicy> {
    units: &'a [E::Unit],
    pos: usize,
    _marker: PhantomData<fn() -> (E, P)>,
}

impl<'a, E: Encoding, P: SubstitutionPolicy> Cursor<'a, E, P> {
    /// A cursor on the first block of `units`.
    #[must_use]
    pub const fn new(units: &'a [E::Unit]) -> Self {
        Self {
            units,
            pos: 0,
            _marker: PhantomData,
        }
    }

    /// A cursor past the last block of `units`.
    #[must_use]
    pub const fn at_end(units: &'a [E::Unit]) -> Self {
        Self {
            units,
            pos: units.len(),
            _marker: PhantomData,
        }
    }

    /// True once the cursor is past the last block.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.pos >= self.units.len()
    }

    /// True while the cursor is on the first block.
    #[inline]
    #[must_use]
    pub const fn at_start(&self) -> bool {
        self.pos == 0
    }

    /// Moves to the next block. Returns `false`, without moving, if the
    /// cursor is already finished.
    pub fn go_next(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.pos = P::next_stop::<E>(self.units, self.pos);
        true
    }

    /// Moves to the previous block. Returns `false`, without moving, if the
    /// cursor is already at the start.
    pub fn go_prev(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.pos = P::prev_stop::<E>(self.units, self.pos);
        true
    }

    /// The scalar value of the current block, or `None` if it is an error
    /// block or the cursor is finished.
    #[must_use]
    pub fn get_codepoint(&self) -> Option<CodePoint> {
        self.get_view().map(|view| view.to_codepoint())
    }

    /// The current block as an [`EncodedView`], or `None` if it is an error
    /// block or the cursor is finished.
    #[must_use]
    pub fn get_view(&self) -> Option<EncodedView<'a, E>> {
        let rest = self.units.get(self.pos..)?;
        let n = E::valid_sequence_len(rest)?;
        Some(EncodedView::from_valid(&rest[..n]))
    }

    /// The code units of the current block, well-formed or not. Empty only
    /// when the cursor is finished.
    #[must_use]
    pub fn get_underlying(&self) -> &'a [E::Unit] {
        let end = P::next_stop::<E>(self.units, self.pos);
        self.units.get(self.pos..end).unwrap_or_default()
    }

    /// Offset of the current block in the buffer.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// The whole buffer.
    #[inline]
    #[must_use]
    pub const fn as_units(&self) -> &'a [E::Unit] {
        self.units
    }

    /// Every block from the cursor position to the end.
    ///
    /// The iterator is double-ended: walking it from the back yields the
    /// same segments in reverse order.
    #[must_use]
    pub fn segments(&self) -> Segments<'a, E, P> {
        Segments {
            units: self.units,
            front: self.pos.min(self.units.len()),
            back: self.units.len(),
            _marker: PhantomData,
        }
    }
}

impl<E: Encoding, P: SubstitutionPolicy> Default for Cursor<'_, E, P> {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl<E: Encoding, P: SubstitutionPolicy> Clone for Cursor<'_, E, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding, P: SubstitutionPolicy> Copy for Cursor<'_, E, P> {}

/// Two cursors are equal when they sit at the same offset of the same
/// buffer (not merely an equal one).
impl<E: Encoding, P: SubstitutionPolicy> PartialEq for Cursor<'_, E, P> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.units, other.units) && self.pos == other.pos
    }
}

impl<E: Encoding, P: SubstitutionPolicy> Eq for Cursor<'_, E, P> {}

impl<E: Encoding, P: SubstitutionPolicy> fmt::Debug for Cursor<'_, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("len", &self.units.len())
            .field("pos", &self.pos)
            .field("underlying", &self.get_underlying())
            .finish()
    }
}

/// One block of a buffer: a well-formed sequence or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a, U> {
    /// Offset of the block in the buffer.
    pub offset: usize,
    /// The code units of the block.
    pub units: &'a [U],
    /// The decoded scalar value, `None` for an error block.
    pub codepoint: Option<CodePoint>,
}

/// Iterator over the blocks of a buffer, returned by [`Cursor::segments`].
pub struct Segments<'a, E: Encoding, P: SubstitutionPolicy> {
    units: &'a [E::Unit],
    front: usize,
    back: usize,
    _marker: PhantomData<fn() -> (E, P)>,
}

impl<'a, E: Encoding, P: SubstitutionPolicy> Segments<'a, E, P> {
    fn segment(&self, start: usize, end: usize) -> Segment<'a, E::Unit> {
        let units = &self.units[start..end];
        let codepoint =
            (E::valid_sequence_len(units) == Some(units.len())).then(|| E::decode(units));
        Segment {
            offset: start,
            units,
            codepoint,
        }
    }
}

impl<'a, E: Encoding, P: SubstitutionPolicy> Iterator for Segments<'a, E, P> {
    type Item = Segment<'a, E::Unit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let start = self.front;
        self.front = P::next_stop::<E>(self.units, start).min(self.back);
        Some(self.segment(start, self.front))
    }
}

impl<E: Encoding, P: SubstitutionPolicy> DoubleEndedIterator for Segments<'_, E, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let end = self.back;
        self.back = P::prev_stop::<E>(self.units, end).max(self.front);
        Some(self.segment(self.back, end))
    }
}

impl<E: Encoding, P: SubstitutionPolicy> FusedIterator for Segments<'_, E, P> {}

impl<E: Encoding, P: SubstitutionPolicy> Clone for Segments<'_, E, P> {
    fn clone(&self) -> Self {
        Self {
            units: self.units,
            front: self.front,
            back: self.back,
            _marker: PhantomData,
        }
    }
}

impl<E: Encoding, P: SubstitutionPolicy> fmt::Debug for Segments<'_, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segments")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

/// UTF-8, one error per ill-formed run.
pub type Utf8Cursor<'a> = Cursor<'a, Utf8, MaximalRun>;
/// UTF-8, one error per maximal subpart.
pub type Utf8CursorAlt<'a> = Cursor<'a, Utf8, PerUnit>;
/// UTF-16, one error per ill-formed run.
pub type Utf16Cursor<'a> = Cursor<'a, Utf16, MaximalRun>;
/// UTF-16, one error per ill-formed word.
pub type Utf16CursorAlt<'a> = Cursor<'a, Utf16, PerUnit>;
/// Byte-swapped UTF-16, one error per ill-formed run.
pub type Utf16SwappedCursor<'a> = Cursor<'a, Utf16Swapped, MaximalRun>;
/// Byte-swapped UTF-16, one error per ill-formed word.
pub type Utf16SwappedCursorAlt<'a> = Cursor<'a, Utf16Swapped, PerUnit>;
/// UTF-32, one error per ill-formed run.
pub type Utf32Cursor<'a> = Cursor<'a, Utf32, MaximalRun>;
/// UTF-32, one error per ill-formed unit.
pub type Utf32CursorAlt<'a> = Cursor<'a, Utf32, PerUnit>;
/// Byte-swapped UTF-32, one error per ill-formed run.
pub type Utf32SwappedCursor<'a> = Cursor<'a, Utf32Swapped, MaximalRun>;
/// Byte-swapped UTF-32, one error per ill-formed unit.
pub type Utf32SwappedCursorAlt<'a> = Cursor<'a, Utf32Swapped, PerUnit>;

/// UTF-16LE, one error per ill-formed run.
pub type Utf16LeCursor<'a> = Cursor<'a, Utf16Le, MaximalRun>;
/// UTF-16BE, one error per ill-formed run.
pub type Utf16BeCursor<'a> = Cursor<'a, Utf16Be, MaximalRun>;
/// UTF-32LE, one error per ill-formed run.
pub type Utf32LeCursor<'a> = Cursor<'a, Utf32Le, MaximalRun>;
/// UTF-32BE, one error per ill-formed run.
pub type Utf32BeCursor<'a> = Cursor<'a, Utf32Be, MaximalRun>;
