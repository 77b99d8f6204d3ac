//! Type lists
//!
//! A type list is a chain of [`Cons`] cells ending in [`Nil`]. The cells are
//! zero-sized markers; only their type parameters carry information.
//!
//! ```
//! use typewise::tlist;
//! use typewise::type_level::TypeList;
//!
//! type Three = tlist![u8, u16, u32];
//! const _: () = assert!(<Three as TypeList>::LEN == 3);
//! ```

use std::any::TypeId;
use std::marker::PhantomData;

/// The empty list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// A list with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

/// Ordered, immutable sequence of types.
pub trait TypeList {
    /// Number of elements
    const LEN: usize;

    /// Whether the list has no elements
    const IS_EMPTY: bool = Self::LEN == 0;
}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Builds a type list from a comma separated list of types.
///
/// `tlist![A, B]` is `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::type_level::Nil };
    ($head:ty, $($tail:tt)*) => {
        $crate::type_level::Cons<$head, $crate::tlist!($($tail)*)>
    };
    ($head:ty) => {
        $crate::type_level::Cons<$head, $crate::type_level::Nil>
    };
}

/// Type equality witness: `A: Same<B>` holds only when `A` and `B` are the
/// same type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not the same type as `{T}`",
    label = "types differ"
)]
pub trait Same<T: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Compile-time type equality assertion.
///
/// Used in const items so a mismatch stops the build:
///
/// ```
/// use typewise::type_level::assert_same;
/// const _: () = assert_same::<u8, u8>();
/// ```
///
/// ```compile_fail
/// use typewise::type_level::assert_same;
/// const _: () = assert_same::<u8, u16>();
/// ```
pub const fn assert_same<A, B>()
where
    A: Same<B> + ?Sized,
    B: ?Sized,
{
}

/// Runtime type identity check.
///
/// Stable Rust has no compile-time type inequality, so "is not" checks go
/// through `TypeId`.
pub fn is_same<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}
