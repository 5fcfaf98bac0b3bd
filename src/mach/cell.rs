use std::convert::TryFrom;

/// ## Data tape storage
///
/// A cell is one fixed-width numeric slot on the data tape. Arithmetic
/// wraps at the width of the chosen type. Output converts the cell value
/// to a Unicode scalar; values with no scalar render as U+FFFD.
pub trait Cell: Copy + Default + PartialEq + std::fmt::Debug {
    const ZERO: Self;
    fn from_byte(byte: u8) -> Self;
    fn next(self) -> Self;
    fn prev(self) -> Self;
    fn code_point(self) -> Option<char>;
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! cell_impl {
    ($($t:ty),*) => {$(
        impl Cell for $t {
            const ZERO: $t = 0;
            fn from_byte(byte: u8) -> $t {
                byte as $t
            }
            fn next(self) -> $t {
                self.wrapping_add(1)
            }
            fn prev(self) -> $t {
                self.wrapping_sub(1)
            }
            fn code_point(self) -> Option<char> {
                u32::try_from(self).ok().and_then(std::char::from_u32)
            }
        }
    )*};
}

cell_impl!(u8, i32, u32, i64, u64);
