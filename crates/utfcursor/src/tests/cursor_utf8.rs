use alloc::vec::Vec;

use rstest::rstest;

use super::utils::{expected_blocks, walk_backward, walk_forward};
use crate::{CodePoint, MaximalRun, PerUnit, Utf8, Utf8Cursor, Utf8CursorAlt, Utf8View};

const VALID: &[&str] = &[
    "",
    "hello",
    "M\u{430}\u{4E8C}\u{10302}",
    "\u{10302}\u{4E8C}\u{430}M",
    "\u{7F}\u{80}\u{7FF}\u{800}\u{FFFF}\u{10000}\u{10FFFF}",
    "\u{D7FF}\u{E000}",
    "ŝ€𐌂 and ascii",
];

/// `(input, one error per run, one error per maximal subpart)`; U+FFFD
/// marks an error block.
const INVALID: &[(&[u8], &[u32], &[u32])] = &[
    // Unicode §3.9, U+FFFD substitution of maximal subparts
    (
        &[0x61, 0xF1, 0x80, 0x80, 0xE1, 0x80, 0xC2, 0x62, 0x80, 0x63, 0x80, 0xBF, 0x64],
        &[0x61, 0xFFFD, 0x62, 0xFFFD, 0x63, 0xFFFD, 0x64],
        &[0x61, 0xFFFD, 0xFFFD, 0xFFFD, 0x62, 0xFFFD, 0x63, 0xFFFD, 0xFFFD, 0x64],
    ),
    // Table 3-11
    (
        &[0xE1, 0x80, 0xE2, 0xF0, 0x91, 0x92, 0xF1, 0xBF, 0x41],
        &[0xFFFD, 0x41],
        &[0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x41],
    ),
    (&[0xE2, 0x28, 0xA1], &[0xFFFD, 0x28, 0xFFFD], &[0xFFFD, 0x28, 0xFFFD]),
    (&[0xC3, 0x28], &[0xFFFD, 0x28], &[0xFFFD, 0x28]),
    (&[0x0D, 0x0A, 0xC3, 0x28], &[0x0D, 0x0A, 0xFFFD, 0x28], &[0x0D, 0x0A, 0xFFFD, 0x28]),
    (&[0xE2, 0xA1, 0x28], &[0xFFFD, 0x28], &[0xFFFD, 0x28]),
    (&[0xF0, 0x28, 0x8C, 0xBC], &[0xFFFD, 0x28, 0xFFFD], &[0xFFFD, 0x28, 0xFFFD, 0xFFFD]),
    (&[0xF0, 0x8C, 0xBC, 0x28], &[0xFFFD, 0x28], &[0xFFFD, 0xFFFD, 0xFFFD, 0x28]),
    (
        &[0x0D, 0x0A, 0xF0, 0x8C, 0xBC, 0x28],
        &[0x0D, 0x0A, 0xFFFD, 0x28],
        &[0x0D, 0x0A, 0xFFFD, 0xFFFD, 0xFFFD, 0x28],
    ),
    // Encoded surrogate
    (&[0xED, 0xA0, 0x80, 0x41], &[0xFFFD, 0x41], &[0xFFFD, 0xFFFD, 0xFFFD, 0x41]),
    // Overlong
    (&[0xC0, 0xAF], &[0xFFFD], &[0xFFFD, 0xFFFD]),
    (&[0xE0, 0x80, 0xAF], &[0xFFFD], &[0xFFFD, 0xFFFD, 0xFFFD]),
    // Beyond U+10FFFF
    (&[0xF4, 0x90, 0x80, 0x80], &[0xFFFD], &[0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD]),
    (&[0xF8, 0x88, 0x80, 0x80, 0x80], &[0xFFFD], &[0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD]),
    // Truncated at the end of the buffer
    (&[0x41, 0xF0, 0x9F, 0x98], &[0x41, 0xFFFD], &[0x41, 0xFFFD]),
    (&[0xC2], &[0xFFFD], &[0xFFFD]),
    // Valid sequence between two error runs
    (
        &[0x80, 0xBF, 0xE2, 0x82, 0xAC, 0xE2, 0x82],
        &[0xFFFD, 0x20AC, 0xFFFD],
        &[0xFFFD, 0xFFFD, 0x20AC, 0xFFFD],
    ),
];

#[test]
fn forward_valid() {
    for text in VALID {
        let expected: Vec<_> = text.chars().map(|c| Some(CodePoint::from(c))).collect();
        assert_eq!(
            walk_forward::<Utf8, MaximalRun>(text.as_bytes()),
            expected,
            "{text:?}"
        );
        assert_eq!(
            walk_forward::<Utf8, PerUnit>(text.as_bytes()),
            expected,
            "{text:?}"
        );
    }
}

#[test]
fn backward_valid() {
    for text in VALID {
        let expected: Vec<_> = text.chars().map(|c| Some(CodePoint::from(c))).collect();
        assert_eq!(
            walk_backward::<Utf8, MaximalRun>(text.as_bytes()),
            expected,
            "{text:?}"
        );
        assert_eq!(
            walk_backward::<Utf8, PerUnit>(text.as_bytes()),
            expected,
            "{text:?}"
        );
    }
}

#[test]
fn forward_invalid() {
    for (bytes, run, per_unit) in INVALID {
        assert_eq!(
            walk_forward::<Utf8, MaximalRun>(bytes),
            expected_blocks(run),
            "{bytes:02X?}"
        );
        assert_eq!(
            walk_forward::<Utf8, PerUnit>(bytes),
            expected_blocks(per_unit),
            "{bytes:02X?}"
        );
    }
}

#[test]
fn backward_invalid() {
    for (bytes, run, per_unit) in INVALID {
        assert_eq!(
            walk_backward::<Utf8, MaximalRun>(bytes),
            expected_blocks(run),
            "{bytes:02X?}"
        );
        assert_eq!(
            walk_backward::<Utf8, PerUnit>(bytes),
            expected_blocks(per_unit),
            "{bytes:02X?}"
        );
    }
}

#[test]
fn empty_buffer() {
    let mut cursor = Utf8Cursor::default();
    assert!(cursor.is_finished());
    assert!(cursor.at_start());
    assert!(!cursor.go_next());
    assert!(!cursor.go_prev());
    assert_eq!(cursor.get_codepoint(), None);
    assert_eq!(cursor.get_view(), None);
    assert!(cursor.get_underlying().is_empty());
    assert_eq!(cursor.segments().count(), 0);

    let empty: [u8; 0] = [];
    let alt = Utf8CursorAlt::new(&empty);
    assert!(alt.is_finished() && alt.at_start());
    assert_eq!(alt, Utf8CursorAlt::at_end(&empty));
}

#[test]
fn underlying_covers_error_blocks() {
    let bytes = [0x61, 0xF1, 0x80, 0x80, 0xE1, 0x80, 0xC2, 0x62];

    let mut cursor = Utf8Cursor::new(&bytes);
    assert!(cursor.go_next());
    assert_eq!(cursor.get_underlying(), &bytes[1..7]);
    assert_eq!(cursor.position(), 1);

    let mut alt = Utf8CursorAlt::new(&bytes);
    assert!(alt.go_next());
    assert_eq!(alt.get_underlying(), &[0xF1, 0x80, 0x80]);
    assert!(alt.go_next());
    assert_eq!(alt.get_underlying(), &[0xE1, 0x80]);
    assert!(alt.go_next());
    assert_eq!(alt.get_underlying(), &[0xC2]);
    assert!(alt.go_next());
    assert_eq!(alt.get_view(), Utf8View::try_from_span(b"b").ok());
}

#[test]
fn direction_changes_mid_buffer() {
    let bytes = [0x41, 0x80, 0x80, 0xC3, 0xA9, 0xFF, 0x42];
    let mut cursor = Utf8CursorAlt::new(&bytes);
    assert!(cursor.go_next());
    assert!(cursor.go_next());
    assert!(cursor.go_next());
    assert_eq!(cursor.get_codepoint(), Some(CodePoint::from('é')));
    assert!(cursor.go_prev());
    assert_eq!(cursor.get_underlying(), &[0x80]);
    assert_eq!(cursor.position(), 2);
    assert!(cursor.go_next());
    assert!(cursor.go_next());
    assert_eq!(cursor.get_underlying(), &[0xFF]);

    let mut cursor = Utf8Cursor::new(&bytes);
    assert!(cursor.go_next());
    assert_eq!(cursor.get_underlying(), &[0x80, 0x80]);
    assert!(cursor.go_next());
    assert!(cursor.go_prev());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn cursors_compare_by_buffer_identity() {
    let a = *b"abc";
    let b = *b"abc";
    let mut x = Utf8Cursor::new(&a);
    let y = Utf8Cursor::new(&a);
    assert_eq!(x, y);
    assert_ne!(x, Utf8Cursor::new(&b));
    x.go_next();
    assert_ne!(x, y);
    assert_eq!(x.as_units(), y.as_units());
}

#[rstest]
#[case(&[0x41, 0xC3, 0xA9], &["A", "é"])]
#[case(&[0xE2, 0x82, 0xAC, 0xF0, 0x90, 0x8D, 0x88], &["€", "𐍈"])]
fn segments_match_chars(#[case] bytes: &[u8], #[case] expected: &[&str]) {
    let segments: Vec<_> = Utf8Cursor::new(bytes).segments().collect();
    assert_eq!(segments.len(), expected.len());
    for (segment, text) in segments.iter().zip(expected) {
        assert_eq!(segment.units, text.as_bytes());
        assert_eq!(
            segment.codepoint.map(CodePoint::to_char),
            text.chars().next()
        );
    }
}

#[test]
fn segments_from_both_ends_meet() {
    let bytes = [0x61, 0xF1, 0x80, 0x80, 0xE1, 0x80, 0xC2, 0x62, 0x80, 0x63, 0x80, 0xBF, 0x64];
    let cursor = Utf8CursorAlt::new(&bytes);

    let forward: Vec<_> = cursor.segments().collect();
    let mut backward: Vec<_> = cursor.segments().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);

    let mut segments = cursor.segments();
    let first = segments.next().map(|s| s.offset);
    let last = segments.next_back().map(|s| s.offset);
    assert_eq!((first, last), (Some(0), Some(12)));
    assert_eq!(segments.count(), forward.len() - 2);
}

#[test]
fn segments_start_at_the_cursor() {
    let bytes = b"xyz";
    let mut cursor = Utf8Cursor::new(bytes);
    cursor.go_next();
    let rest: Vec<_> = cursor.segments().map(|s| s.offset).collect();
    assert_eq!(rest, [1, 2]);
}
