#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfcursor::{
    CodePoint, Cursor, DecodeOptions, Encoding, MaximalRun, PerUnit, Substitution,
    SubstitutionPolicy, Utf8, Utf16, Utf16Swapped, Utf32, Utf32Swapped, decode_all, decode_lossy,
    is_well_formed, validate_utf8,
};

#[derive(Debug, Arbitrary)]
enum Input {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

/// Segments found from either end must tile the buffer identically.
fn check_tiling<E: Encoding, P: SubstitutionPolicy>(units: &[E::Unit]) {
    let cursor = Cursor::<E, P>::new(units);
    let forward: Vec<_> = cursor.segments().collect();
    let mut backward: Vec<_> = cursor.segments().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);

    let mut pos = 0;
    for segment in &forward {
        assert_eq!(segment.offset, pos);
        assert!(!segment.units.is_empty());
        assert!(segment.units.len() <= E::MAX_SEQUENCE_LEN || segment.codepoint.is_none());
        pos += segment.units.len();
    }
    assert_eq!(pos, units.len());
}

fn check_all<E: Encoding>(units: &[E::Unit]) {
    check_tiling::<E, MaximalRun>(units);
    check_tiling::<E, PerUnit>(units);

    let run = decode_all::<E, MaximalRun>(units);
    let per_unit = decode_all::<E, PerUnit>(units);
    let valid = |blocks: &[Option<CodePoint>]| -> Vec<CodePoint> {
        blocks.iter().flatten().copied().collect()
    };
    assert_eq!(valid(&run), valid(&per_unit));
    assert!(run.len() <= per_unit.len());
    assert_eq!(is_well_formed::<E>(units), run.iter().all(Option::is_some));
}

fuzz_target!(|input: Input| match input {
    Input::Utf8(bytes) => {
        check_all::<Utf8>(&bytes);

        let std_result = core::str::from_utf8(&bytes);
        match (validate_utf8(&bytes), std_result) {
            (Ok(()), Ok(_)) => {}
            (Err(ours), Err(theirs)) => {
                assert_eq!(ours.valid_up_to(), theirs.valid_up_to());
                assert_eq!(ours.error_len(), theirs.error_len());
            }
            (ours, theirs) => panic!("validate_utf8 {ours:?} disagrees with core {theirs:?}"),
        }

        let options = DecodeOptions {
            substitution: Substitution::PerUnit,
            ..Default::default()
        };
        let lossy: String = decode_lossy::<Utf8>(&bytes, &options)
            .into_iter()
            .map(char::from)
            .collect();
        assert_eq!(lossy, String::from_utf8_lossy(&bytes));
    }
    Input::Utf16(words) => {
        check_all::<Utf16>(&words);
        let swapped: Vec<u16> = words.iter().map(|w| w.swap_bytes()).collect();
        check_all::<Utf16Swapped>(&swapped);
        assert_eq!(
            decode_all::<Utf16, MaximalRun>(&words),
            decode_all::<Utf16Swapped, MaximalRun>(&swapped)
        );

        let expected: Vec<Option<CodePoint>> = char::decode_utf16(words.iter().copied())
            .map(|r| r.ok().map(CodePoint::from))
            .collect();
        assert_eq!(decode_all::<Utf16, PerUnit>(&words), expected);
    }
    Input::Utf32(units) => {
        check_all::<Utf32>(&units);
        let swapped: Vec<u32> = units.iter().map(|u| u.swap_bytes()).collect();
        check_all::<Utf32Swapped>(&swapped);
        assert_eq!(
            decode_all::<Utf32, PerUnit>(&units),
            decode_all::<Utf32Swapped, PerUnit>(&swapped)
        );
    }
});
