pub trait HasAddIdent {
    const IDENT: Self;
}

pub trait HasMulIdent {
    const IDENT: Self;
}

macro_rules! has_ident_num_impl {
    ($zero:literal, $one:literal; $($t:ty),* $(,)?) => {
        $(
            impl HasAddIdent for $t {
                const IDENT: Self = $zero;
            }

            impl HasMulIdent for $t {
                const IDENT: Self = $one;
            }
        )*
    };
}

has_ident_num_impl! {0, 1; u8, u16, u32, u64, u128, usize}
has_ident_num_impl! {0, 1; i8, i16, i32, i64, i128, isize}
has_ident_num_impl! {0.0, 1.0; f32, f64}

impl<T: HasAddIdent> HasAddIdent for std::num::Wrapping<T> {
    const IDENT: Self = Self(<T as HasAddIdent>::IDENT);
}

impl<T: HasMulIdent> HasMulIdent for std::num::Wrapping<T> {
    const IDENT: Self = Self(<T as HasMulIdent>::IDENT);
}
