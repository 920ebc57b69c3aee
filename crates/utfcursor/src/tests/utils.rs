use alloc::vec::Vec;

use crate::{CodePoint, Cursor, Encoding, SubstitutionPolicy};

/// Expected output with U+FFFD marking an error block, the way the test
/// tables are written.
pub(crate) fn expected_blocks(expected: &[u32]) -> Vec<Option<CodePoint>> {
    expected
        .iter()
        .map(|&v| {
            if v == 0xFFFD {
                None
            } else {
                CodePoint::from_u32(v)
            }
        })
        .collect()
}

/// Walks `units` from the start, checking that the getters agree with each
/// other at every stop.
pub(crate) fn walk_forward<E: Encoding, P: SubstitutionPolicy>(
    units: &[E::Unit],
) -> Vec<Option<CodePoint>> {
    let mut cursor = Cursor::<E, P>::new(units);
    let mut out = Vec::new();
    while !cursor.is_finished() {
        out.push(check_stop(&cursor));
        assert!(cursor.go_next());
    }
    assert!(!cursor.go_next());
    assert_eq!(cursor.position(), units.len());
    out
}

/// Walks `units` from the end and returns the blocks in buffer order.
pub(crate) fn walk_backward<E: Encoding, P: SubstitutionPolicy>(
    units: &[E::Unit],
) -> Vec<Option<CodePoint>> {
    let mut cursor = Cursor::<E, P>::at_end(units);
    let mut out = Vec::new();
    while cursor.go_prev() {
        out.push(check_stop(&cursor));
    }
    assert!(cursor.at_start());
    assert!(!cursor.go_prev());
    out.reverse();
    out
}

/// Stopping positions visited by `go_next` from the start, and by `go_prev`
/// from the end (reversed), in that order.
pub(crate) fn stops_both_ways<E: Encoding, P: SubstitutionPolicy>(
    units: &[E::Unit],
) -> (Vec<usize>, Vec<usize>) {
    let mut cursor = Cursor::<E, P>::new(units);
    let mut forward = alloc::vec![cursor.position()];
    while cursor.go_next() {
        forward.push(cursor.position());
    }

    let mut cursor = Cursor::<E, P>::at_end(units);
    let mut backward = alloc::vec![cursor.position()];
    while cursor.go_prev() {
        backward.push(cursor.position());
    }
    backward.reverse();
    (forward, backward)
}

fn check_stop<E: Encoding, P: SubstitutionPolicy>(cursor: &Cursor<'_, E, P>) -> Option<CodePoint> {
    let cp = cursor.get_codepoint();
    let underlying = cursor.get_underlying();
    assert!(!underlying.is_empty());
    match cursor.get_view() {
        Some(view) => {
            assert_eq!(Some(view.to_codepoint()), cp);
            assert_eq!(view.as_units(), underlying);
        }
        None => assert_eq!(cp, None),
    }
    cp
}
