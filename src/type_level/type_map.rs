//! Type-to-type maps
//!
//! A map is built once from an ordered list of [`Entry`]s:
//!
//! ```
//! use typewise::{type_map, type_level::{assert_same, Get, Z, S}};
//!
//! struct A;
//! struct B;
//!
//! type MyMap = type_map! { A => i32, B => f32 };
//!
//! const _: () = assert_same::<Get<MyMap, A, Z>, i32>();
//! const _: () = assert_same::<Get<MyMap, B, S<Z>>, f32>();
//! ```
//!
//! Lookup splits the entries into two parallel lists, `Keys` and `Values`,
//! finds the position of the needle in `Keys` and projects that position
//! into `Values`. The position is normally inferred:
//!
//! ```
//! # use typewise::type_map;
//! # use std::marker::PhantomData;
//! # struct A;
//! # struct B;
//! # type MyMap = type_map! { A => i32, B => f32 };
//! let _: PhantomData<f32> = MyMap::get::<B, _>();
//! ```
//!
//! Asking for a key the map does not hold does not compile:
//!
//! ```compile_fail
//! # use typewise::type_map;
//! # struct A;
//! # struct B;
//! # struct C;
//! # type MyMap = type_map! { A => i32, B => f32 };
//! let _ = MyMap::get::<C, _>();
//! ```
//!
//! Nor does searching an empty map:
//!
//! ```compile_fail
//! # use typewise::type_map;
//! # struct A;
//! let _ = <type_map! {}>::get::<A, _>();
//! ```

use std::marker::PhantomData;

use super::hlist::{Cons, Nil, TypeList};
use super::nat::{Nat, S, Z};

/// A single key to value binding
pub struct Entry<K, V>(PhantomData<fn() -> (K, V)>);

/// A list of entries, split into parallel key and value lists.
///
/// The key at position `i` of `Keys` is bound to the value at position `i`
/// of `Values`.
pub trait Entries {
    type Keys: TypeList;
    type Values: TypeList;
}

impl Entries for Nil {
    type Keys = Nil;
    type Values = Nil;
}

impl<K, V, T: Entries> Entries for Cons<Entry<K, V>, T> {
    type Keys = Cons<K, T::Keys>;
    type Values = Cons<V, T::Values>;
}

/// Linear search for `Needle`, yielding its position `I`.
///
/// Matches on exact type identity. When `Needle` is not in the list no impl
/// applies.
#[diagnostic::on_unimplemented(
    message = "requested key type `{Needle}` not present in map",
    label = "no entry for `{Needle}`"
)]
pub trait Find<Needle, I: Nat> {
    /// Position of the needle
    const POSITION: usize = I::VALUE;
}

impl<Needle, T> Find<Needle, Z> for Cons<Needle, T> {}

impl<Needle, H, T, I> Find<Needle, S<I>> for Cons<H, T>
where
    I: Nat,
    T: Find<Needle, I>,
{
}

/// Projection of the element at position `I`.
pub trait At<I: Nat> {
    type Output;
}

impl<H, T> At<Z> for Cons<H, T> {
    type Output = H;
}

impl<H, T, I> At<S<I>> for Cons<H, T>
where
    I: Nat,
    T: At<I>,
{
    type Output = T::Output;
}

/// The map itself. `E` is a type list of [`Entry`]s with unique keys.
pub struct TypeMap<E>(PhantomData<fn() -> E>);

/// Lookup of `K`, found at position `I`.
#[diagnostic::on_unimplemented(
    message = "requested key type `{K}` not present in map `{Self}`",
    label = "no entry for `{K}`"
)]
pub trait Lookup<K, I> {
    type Value;
}

impl<E, K, I> Lookup<K, I> for TypeMap<E>
where
    E: Entries,
    I: Nat,
    E::Keys: Find<K, I>,
    E::Values: At<I>,
{
    type Value = <E::Values as At<I>>::Output;
}

/// The value bound to `K` in map `M`, with `I` the key's position.
pub type Get<M, K, I> = <M as Lookup<K, I>>::Value;

impl<E: Entries> TypeMap<E> {
    /// Number of entries
    pub const LEN: usize = <E::Keys as TypeList>::LEN;

    /// Resolves `K` to its value type. The position is inferred, so callers
    /// write `get::<K, _>()`.
    pub const fn get<K, I>() -> PhantomData<Get<Self, K, I>>
    where
        Self: Lookup<K, I>,
    {
        PhantomData
    }

    /// Position of `K` in the key list
    pub const fn position<K, I>() -> usize
    where
        I: Nat,
        E::Keys: Find<K, I>,
    {
        <E::Keys as Find<K, I>>::POSITION
    }
}

/// Builds a [`TypeMap`] from `Key => Value` pairs.
#[macro_export]
macro_rules! type_map {
    ($($key:ty => $value:ty),* $(,)?) => {
        $crate::type_level::TypeMap<$crate::tlist![$($crate::type_level::Entry<$key, $value>),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_level::hlist::{assert_same, is_same};

    struct A;
    struct B;
    struct C;

    type MyMap = crate::type_map! { A => i32, B => f32 };
    type Wide = crate::type_map! { A => u8, B => u16, C => u32 };

    const _: () = assert_same::<<MyMap as Lookup<A, Z>>::Value, i32>();
    const _: () = assert_same::<Get<MyMap, B, S<Z>>, f32>();
    const _: () = assert_same::<Get<Wide, C, S<S<Z>>>, u32>();

    const _: () = assert_same::<
        <crate::tlist![Entry<A, i32>, Entry<B, f32>] as Entries>::Keys,
        crate::tlist![A, B],
    >();
    const _: () = assert_same::<
        <crate::tlist![Entry<A, i32>, Entry<B, f32>] as Entries>::Values,
        crate::tlist![i32, f32],
    >();

    #[test]
    fn test_inferred_lookup() {
        let _: PhantomData<i32> = MyMap::get::<A, _>();
        let _: PhantomData<f32> = MyMap::get::<B, _>();
        let _: PhantomData<u16> = Wide::get::<B, _>();
    }

    #[test]
    fn test_value_is_not_key() {
        fn value_of<V: 'static>(_: PhantomData<V>) -> std::any::TypeId {
            std::any::TypeId::of::<V>()
        }

        assert_ne!(value_of(MyMap::get::<A, _>()), std::any::TypeId::of::<A>());
        assert_ne!(value_of(MyMap::get::<A, _>()), std::any::TypeId::of::<f32>());
        assert_ne!(value_of(MyMap::get::<B, _>()), std::any::TypeId::of::<i32>());
        assert!(!is_same::<Get<MyMap, B, S<Z>>, A>());
    }

    #[test]
    fn test_positions() {
        assert_eq!(MyMap::LEN, 2);
        assert_eq!(Wide::LEN, 3);
        assert_eq!(Wide::position::<A, _>(), 0);
        assert_eq!(Wide::position::<C, _>(), 2);
        assert_eq!(<crate::type_map! {}>::LEN, 0);
    }
}
