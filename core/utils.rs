use core::mem;

pub trait ZExtract<U>: Sized {
    fn zextract(&self, pos: u32, len: u32) -> U;
}

pub trait SExtract<S>: Sized {
    fn sextract(&self, pos: u32, len: u32) -> S;
}

pub trait Deposit: Sized {
    fn deposit<F: Into<Self>>(&self, pos: u32, len: u32, field: F) -> Self;
}

macro_rules! impl_bits {
    ($($uint:ty = $sint:ty),+ $(,)?) => ($(
        impl ZExtract<$uint> for $uint {
            #[inline]
            fn zextract(&self, pos: u32, len: u32) -> $uint {
                let w = mem::size_of::<$uint>() as u32 * 8;
                (*self << (w - pos - len)) >> (w - len)
            }
        }

        impl SExtract<$sint> for $uint {
            #[inline]
            fn sextract(&self, pos: u32, len: u32) -> $sint {
                let w = mem::size_of::<$uint>() as u32 * 8;
                (*self << (w - pos - len)) as $sint >> (w - len)
            }
        }

        impl Deposit for $uint {
            #[inline]
            fn deposit<F: Into<Self>>(&self, pos: u32, len: u32, field: F) -> Self {
                let mask = (1 as $uint).checked_shl(len).unwrap_or(0).wrapping_sub(1) << pos;
                (*self & !mask) | ((field.into() << pos) & mask)
            }
        }
    )+);
}

impl_bits! {
    u8 = i8,
    u16 = i16,
    u32 = i32,
    u64 = i64,
}

/// Extracts `len` bits at `pos` as an unsigned value.
pub fn zextract<U, T: ZExtract<U>>(value: T, pos: u32, len: u32) -> U {
    value.zextract(pos, len)
}

/// Extracts `len` bits at `pos` and sign-extends them.
pub fn sextract<S, T: SExtract<S>>(value: T, pos: u32, len: u32) -> S {
    value.sextract(pos, len)
}

/// Replaces `len` bits at `pos` with the low bits of `field`.
pub fn deposit<T: Deposit, F: Into<T>>(value: T, pos: u32, len: u32, field: F) -> T {
    value.deposit(pos, len, field)
}

