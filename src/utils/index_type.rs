//! Compact integer types used as ring-buffer cursors.

use core::fmt::Debug;
use core::hash::Hash;

/// A sealed-by-convention trait for integer types used as **ring-buffer cursors**.
///
/// Storing cursors as `u8` or `u16` shrinks the deque header on small targets. The
/// largest value of each type is reserved as [`NONE`](IndexType::NONE), so a buffer
/// indexed by `I` may hold at most `I::NONE - 1` bytes (or slots).
pub trait IndexType: Copy + Eq + Hash + Debug + 'static {
    /// Sentinel value meaning "no position" (the deque's EMPTY marker).
    /// Always outside the valid index range.
    const NONE: Self;

    /// The first valid index.
    const ZERO: Self;

    /// Converts this index to a `usize` for slice access.
    fn as_usize(self) -> usize;

    /// Converts a `usize` position to this compact type.
    ///
    /// Truncates if `i` does not fit; callers check the range up front.
    fn from_usize(i: usize) -> Self;

    /// Increments the index (self + 1).
    fn inc(self) -> Self;

    /// Decrements the index (self - 1).
    fn dec(self) -> Self;

    /// Returns true if the index is zero.
    fn is_zero(self) -> bool;
}

macro_rules! impl_index_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IndexType for $ty {
                const NONE: Self = <$ty>::MAX;
                const ZERO: Self = 0;
                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }
                #[inline(always)]
                fn from_usize(i: usize) -> Self {
                    i as $ty
                }
                #[inline(always)]
                fn inc(self) -> Self {
                    self + 1
                }
                #[inline(always)]
                fn dec(self) -> Self {
                    self - 1
                }
                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_index_type!(u8, u16, u32, usize);
