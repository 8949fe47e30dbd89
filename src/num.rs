use std::{
    num::Wrapping,
    ops::{Add, Sub},
};

pub use self::ident::{HasAddIdent, HasMulIdent};

mod ident;

/// Fenwick木に格納できる数値型。
///
/// 加算・減算と加法単位元を持てばよい。
pub trait Element: Clone + Add<Output = Self> + Sub<Output = Self> + HasAddIdent {}

impl<T> Element for T where T: Clone + Add<Output = T> + Sub<Output = T> + HasAddIdent {}

/// 値を`n`倍する。
///
/// 区間加算・区間和のFenwick木で、差分を位置倍するために使う。
pub trait Times {
    fn times(&self, n: usize) -> Self;
}

macro_rules! times_num_impl {
    ($($t:ty),* $(,)?) => {
        $(impl Times for $t {
            fn times(&self, n: usize) -> Self {
                self * n as $t
            }
        })*
    };
}

macro_rules! times_wrapping_impl {
    ($($t:ty),* $(,)?) => {
        $(impl Times for Wrapping<$t> {
            fn times(&self, n: usize) -> Self {
                self * Wrapping(n as $t)
            }
        })*
    };
}

times_num_impl! {u8, u16, u32, u64, u128, usize}
times_num_impl! {i8, i16, i32, i64, i128, isize}
times_num_impl! {f32, f64}

times_wrapping_impl! {u8, u16, u32, u64, u128, usize}
times_wrapping_impl! {i8, i16, i32, i64, i128, isize}

/// `i`の最下位ビット。`i == 0`のときは`0`を返す。
#[inline]
pub(crate) fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowbit_test() {
        assert_eq!(lowbit(0), 0);
        assert_eq!(lowbit(1), 1);
        assert_eq!(lowbit(6), 2);
        assert_eq!(lowbit(12), 4);
        assert_eq!(lowbit(16), 16);
        assert_eq!(lowbit(usize::MAX), 1);
    }

    #[test]
    fn times_test() {
        assert_eq!(7i64.times(3), 21);
        assert_eq!((-4i32).times(5), -20);
        assert_eq!(3u8.times(0), 0);
        assert_eq!(1.5f64.times(4), 6.0);
        assert_eq!(Wrapping(200u8).times(2), Wrapping(144));
    }

    #[test]
    fn ident_test() {
        assert_eq!(<i64 as HasAddIdent>::IDENT, 0);
        assert_eq!(<u32 as HasMulIdent>::IDENT, 1);
        assert_eq!(<f32 as HasAddIdent>::IDENT, 0.0);
        assert_eq!(<Wrapping<u8> as HasAddIdent>::IDENT, Wrapping(0));
    }
}
