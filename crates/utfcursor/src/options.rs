use crate::CodePoint;

/// How ill-formed input is cut into error blocks when decoding a whole
/// buffer.
///
/// # Default
///
/// [`Substitution::MaximalRun`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Substitution {
    /// A whole ill-formed run is one error, however many units it spans.
    ///
    /// This is the behaviour of [`Utf8Cursor`](crate::Utf8Cursor) and the
    /// other cursors without the `Alt` suffix.
    #[default]
    MaximalRun,
    /// One error per maximal subpart (Unicode Table 3-11). For UTF-16 and
    /// UTF-32 this is one error per ill-formed unit.
    ///
    /// This is the behaviour of [`Utf8CursorAlt`](crate::Utf8CursorAlt) and
    /// the other `Alt` cursors.
    PerUnit,
}

/// Configuration for [`decode_lossy`](crate::decode_lossy).
///
/// # Examples
///
/// ```rust
/// use utfcursor::{CodePoint, DecodeOptions, Substitution, Utf8, decode_lossy};
///
/// let bytes = [0x61, 0xE1, 0x80, 0xE2, 0x62];
///
/// let lossy = decode_lossy::<Utf8>(&bytes, &DecodeOptions::default());
/// assert_eq!(lossy.len(), 3);
///
/// let options = DecodeOptions {
///     substitution: Substitution::PerUnit,
///     ..Default::default()
/// };
/// let lossy = decode_lossy::<Utf8>(&bytes, &options);
/// assert_eq!(lossy[1], CodePoint::REPLACEMENT_CHARACTER);
/// assert_eq!(lossy.len(), 4);
///
/// let options = DecodeOptions {
///     replacement: None,
///     ..Default::default()
/// };
/// assert_eq!(decode_lossy::<Utf8>(&bytes, &options).len(), 2);
/// ```
///
/// # Default
///
/// Maximal-run substitution, replacing each error block with U+FFFD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// How ill-formed runs are split into error blocks.
    ///
    /// # Default
    ///
    /// [`Substitution::MaximalRun`]
    pub substitution: Substitution,

    /// What each error block decodes to. `None` drops error blocks from the
    /// output.
    ///
    /// # Default
    ///
    /// `Some(CodePoint::REPLACEMENT_CHARACTER)`
    pub replacement: Option<CodePoint>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            substitution: Substitution::default(),
            replacement: Some(CodePoint::REPLACEMENT_CHARACTER),
        }
    }
}
