//! How ill-formed runs are cut into error blocks.
//!
//! A policy partitions a buffer into blocks: each block is either one
//! well-formed sequence or one error. The block boundaries are the
//! *stopping positions* of a cursor. Both policies define the partition by
//! forward traversal from the start of the buffer; the backward step is
//! derived from it, so that walking backwards from the end visits the same
//! stopping positions in reverse order.

use super::Encoding;

/// A rule for cutting ill-formed input into error blocks.
pub trait SubstitutionPolicy {
    /// The stopping position following `pos`.
    ///
    /// `pos` must be a stopping position. Returns `units.len()` when `pos`
    /// is at or past the end.
    fn next_stop<E: Encoding>(units: &[E::Unit], pos: usize) -> usize;

    /// The stopping position preceding `pos`.
    ///
    /// `pos` must be a stopping position. Returns 0 when `pos` is 0.
    fn prev_stop<E: Encoding>(units: &[E::Unit], pos: usize) -> usize;
}

/// One error per ill-formed run, however long.
///
/// An error block extends from the failing position up to the next
/// position where a well-formed sequence begins, or to the end of the
/// buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaximalRun {}

/// One error per maximal subpart.
///
/// For UTF-16 and UTF-32 this is one error per ill-formed unit. For UTF-8 it
/// is Table 3-11: a leading byte and the continuation bytes that were still
/// in range when the sequence broke off form one error, and the byte that
/// broke it starts the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerUnit {}

impl SubstitutionPolicy for MaximalRun {
    fn next_stop<E: Encoding>(units: &[E::Unit], pos: usize) -> usize {
        let Some(rest) = units.get(pos..).filter(|rest| !rest.is_empty()) else {
            return units.len();
        };
        if let Some(n) = E::valid_sequence_len(rest) {
            return pos + n;
        }
        (pos + 1..units.len())
            .find(|&i| E::valid_sequence_len(&units[i..]).is_some())
            .unwrap_or(units.len())
    }

    fn prev_stop<E: Encoding>(units: &[E::Unit], pos: usize) -> usize {
        let pos = pos.min(units.len());
        // Every position that begins a well-formed sequence is a stopping
        // position. The nearest one behind `pos` either is the previous
        // block, or ends where an error run up to `pos` begins.
        for p in (0..pos).rev() {
            if let Some(n) = E::valid_sequence_len(&units[p..]) {
                return if p + n >= pos { p } else { p + n };
            }
        }
        0
    }
}

impl SubstitutionPolicy for PerUnit {
    fn next_stop<E: Encoding>(units: &[E::Unit], pos: usize) -> usize {
        let Some(rest) = units.get(pos..).filter(|rest| !rest.is_empty()) else {
            return units.len();
        };
        let n = E::valid_sequence_len(rest).unwrap_or_else(|| E::maximal_subpart_len(rest));
        pos + n.max(1)
    }

    fn prev_stop<E: Encoding>(units: &[E::Unit], pos: usize) -> usize {
        let pos = pos.min(units.len());
        if pos == 0 {
            return 0;
        }
        // A block is never longer than MAX_SEQUENCE_LEN, and only a unit
        // that can begin a sequence starts a block longer than one unit. If
        // none is in reach, the last unit is a block on its own.
        let floor = pos.saturating_sub(E::MAX_SEQUENCE_LEN);
        let Some(anchor) = (floor..pos)
            .rev()
            .find(|&i| i == 0 || E::can_begin_sequence(units[i]))
        else {
            return pos - 1;
        };
        let mut stop = anchor;
        loop {
            let next = Self::next_stop::<E>(units, stop);
            if next >= pos {
                return stop;
            }
            stop = next;
        }
    }
}
