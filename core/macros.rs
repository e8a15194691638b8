/// Generates a getter and a `with_*` builder for every bit field of a word.
///
/// Each line is `getter, builder = pos, len, type[, map];`. A `bool` field is
/// true when any of its bits is set. The optional `map` receives the raw
/// extracted `u32` before the final cast.
#[macro_export]
macro_rules! impl_field {
    ($($(#[$attr:meta])* $name:ident, $set:ident =
        $pos:expr,
        $len:expr,
        $ret:tt
        $(, $map:expr)?
    ;)*) => ($(
        $crate::impl_field!(impl $(#[$attr])* $name, $set, $ret, $pos, $len $(, $map)?);
    )*);
    (impl
        $(#[$attr:meta])*
        $name:ident,
        $set:ident,
        bool,
        $pos:expr,
        $len:expr
    ) => (
        $(#[$attr])*
        #[inline]
        pub fn $name(&self) -> bool {
            $crate::utils::zextract::<u32, u32>(self.raw(), $pos, $len) != 0
        }

        #[inline]
        #[must_use]
        pub fn $set(self, value: bool) -> Self {
            Self($crate::utils::deposit(self.raw(), $pos, $len, value as u32))
        }
    );
    (impl
        $(#[$attr:meta])*
        $name:ident,
        $set:ident,
        $ret:ty,
        $pos:expr,
        $len:expr
        $(, $map:expr)?
    ) => (
        $(#[$attr])*
        #[inline]
        pub fn $name(&self) -> $ret {
            let ret: u32 = $crate::utils::zextract(self.raw(), $pos, $len);
            $(let ret = $map(ret);)?
            ret as $ret
        }

        #[inline]
        #[must_use]
        pub fn $set(self, value: $ret) -> Self {
            Self($crate::utils::deposit(self.raw(), $pos, $len, value as u32))
        }
    );
}
pub use impl_field;

/// Declares string maps indexed by raw field values.
///
/// Missing values resolve to `None`.
#[macro_export]
macro_rules! define_map {
    ($($(#[$attr:meta])* $vis:vis fn $name:ident { $($value:literal => $s:literal),+ $(,)? })*) => ($(
        $(#[$attr])*
        $vis fn $name(value: u32) -> Option<&'static str> {
            Some(match value {
                $($value => $s,)+
                _ => return None,
            })
        }
    )*);
}
pub use define_map;
