#![expect(missing_docs)]

use core::fmt::Write;

use utfcursor::{
    Cursor, Encoding, MaximalRun, PerUnit, SubstitutionPolicy, Utf8, Utf16, Utf32Swapped,
};

fn render<E, P>(units: &[E::Unit]) -> String
where
    E: Encoding,
    P: SubstitutionPolicy,
{
    let cursor = Cursor::<E, P>::new(units);
    let mut out = String::new();
    for segment in cursor.segments() {
        let rendered = segment
            .codepoint
            .map_or_else(|| "error".to_string(), |cp| cp.to_string());
        writeln!(out, "{}: {:02X?} {}", segment.offset, segment.units, rendered).unwrap();
    }

    // The same blocks, discovered from the end.
    let forward: Vec<_> = cursor.segments().collect();
    let mut backward: Vec<_> = cursor.segments().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    out
}

#[test]
fn snapshot_utf8_substitution_of_maximal_subparts() {
    let bytes = [0x61, 0xF1, 0x80, 0x80, 0xE1, 0x80, 0xC2, 0x62, 0x80, 0x63, 0x80, 0xBF, 0x64];

    insta::assert_snapshot!(render::<Utf8, MaximalRun>(&bytes), @r"
    0: [61] U+0061
    1: [F1, 80, 80, E1, 80, C2] error
    7: [62] U+0062
    8: [80] error
    9: [63] U+0063
    10: [80, BF] error
    12: [64] U+0064
    ");
    insta::assert_snapshot!(render::<Utf8, PerUnit>(&bytes), @r"
    0: [61] U+0061
    1: [F1, 80, 80] error
    4: [E1, 80] error
    6: [C2] error
    7: [62] U+0062
    8: [80] error
    9: [63] U+0063
    10: [80] error
    11: [BF] error
    12: [64] U+0064
    ");
}

#[test]
fn snapshot_utf8_truncated_three_byte_sequence() {
    let bytes = [0xE2, 0x28, 0xA1];
    insta::assert_snapshot!(render::<Utf8, MaximalRun>(&bytes), @r"
    0: [E2] error
    1: [28] U+0028
    2: [A1] error
    ");
}

#[test]
fn snapshot_utf16_reversed_surrogates() {
    let words = [0x3FD9, 0x00A0, 0xDD50, 0xD80D, 0xDA1F, 0xDDC9, 0xDACB, 0xDD55, 0x4134, 0xF936];

    insta::assert_snapshot!(render::<Utf16, MaximalRun>(&words), @r"
    0: [3FD9] U+3FD9
    1: [A0] U+00A0
    2: [DD50, D80D] error
    4: [DA1F, DDC9] U+97DC9
    6: [DACB, DD55] U+C2D55
    8: [4134] U+4134
    9: [F936] U+F936
    ");
    insta::assert_snapshot!(render::<Utf16, PerUnit>(&words), @r"
    0: [3FD9] U+3FD9
    1: [A0] U+00A0
    2: [DD50] error
    3: [D80D] error
    4: [DA1F, DDC9] U+97DC9
    6: [DACB, DD55] U+C2D55
    8: [4134] U+4134
    9: [F936] U+F936
    ");
}

#[test]
fn snapshot_utf32_opposite_byte_order() {
    let units = [0x4100_0000, 0x0000_0041, 0x00F6_0100];
    insta::assert_snapshot!(render::<Utf32Swapped, PerUnit>(&units), @r"
    0: [41000000] U+0041
    1: [41] error
    2: [F60100] U+1F600
    ");
}
