//! Byte-order reversal for fixed-width integers.

/// A fixed-width integer whose in-memory byte order can be reversed.
pub trait ReverseBytes: Copy {
    /// Returns `self` with its bytes in the opposite order.
    #[must_use]
    fn reverse_bytes(self) -> Self;
}

macro_rules! impl_reverse_bytes {
    ($($t:ty),* $(,)?) => {
        $(
            impl ReverseBytes for $t {
                #[inline(always)]
                fn reverse_bytes(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

impl_reverse_bytes!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Free-function form of [`ReverseBytes::reverse_bytes`].
///
/// ```rust
/// use utfcursor::reverse_bytes;
///
/// assert_eq!(reverse_bytes(0xAABB_CCDDu32), 0xDDCC_BBAA);
/// ```
#[inline(always)]
#[must_use]
pub fn reverse_bytes<T: ReverseBytes>(v: T) -> T {
    v.reverse_bytes()
}
