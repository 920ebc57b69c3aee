//! Per-encoding classification, size, payload and search primitives.
//!
//! Every function here is total and never panics. Functions documented with
//! a precondition return an unspecified value when it is violated; callers
//! check validity first and then act.
//!
//! ```text
//! Table 3-7. Well-Formed UTF-8 Byte Sequences
//! Code Points          First Byte    Second Byte    Third Byte    Fourth Byte
//! U+0000..U+007F       00..7F
//! U+0080..U+07FF       C2..DF        80..BF
//! U+0800..U+0FFF       E0            A0..BF         80..BF
//! U+1000..U+CFFF       E1..EC        80..BF         80..BF
//! U+D000..U+D7FF       ED            80..9F         80..BF
//! U+E000..U+FFFF       EE..EF        80..BF         80..BF
//! U+10000..U+3FFFF     F0            90..BF         80..BF        80..BF
//! U+40000..U+FFFFF     F1..F3        80..BF         80..BF        80..BF
//! U+100000..U+10FFFF   F4            80..8F         80..BF        80..BF
//! ```

pub mod utf16;
pub mod utf32;
pub mod utf8;
