//! Reification: static types to runtime terms
//!
//! Lets the battery print a static result and compare it with the runtime
//! evaluator. Nominal types opt in with [`reify_named!`](crate::reify_named).

use super::hlist::{Cons, Nil};
use super::product::Pair;
use super::type_map::{Entry, TypeMap};
use super::values::{Isize, Usize, I16, I32, I64, I8, U16, U32, U64, U8};
use super::TypeLevelResult;
use crate::eval::{self, TermList, TypeTerm};

/// A type with a runtime description
pub trait Reify {
    fn reify() -> TypeTerm;
}

/// A type list whose elements all implement [`Reify`]
pub trait ReifyList {
    fn collect_into(out: &mut Vec<TypeTerm>);

    fn reify_list() -> TermList {
        let mut out = Vec::new();
        Self::collect_into(&mut out);
        out.into()
    }
}

impl ReifyList for Nil {
    fn collect_into(_out: &mut Vec<TypeTerm>) {}
}

impl<H: Reify, T: ReifyList> ReifyList for Cons<H, T> {
    fn collect_into(out: &mut Vec<TypeTerm>) {
        out.push(H::reify());
        T::collect_into(out);
    }
}

impl Reify for Nil {
    fn reify() -> TypeTerm {
        TypeTerm::List(TermList::new())
    }
}

impl<H: Reify, T: ReifyList> Reify for Cons<H, T> {
    fn reify() -> TypeTerm {
        TypeTerm::List(Self::reify_list())
    }
}

impl<A: Reify, B: Reify> Reify for Pair<A, B> {
    fn reify() -> TypeTerm {
        TypeTerm::pair(A::reify(), B::reify())
    }
}

/// A list of map entries with reifiable keys and values
pub trait ReifyEntries {
    fn collect_into(out: &mut Vec<(TypeTerm, TypeTerm)>);
}

impl ReifyEntries for Nil {
    fn collect_into(_out: &mut Vec<(TypeTerm, TypeTerm)>) {}
}

impl<K: Reify, V: Reify, T: ReifyEntries> ReifyEntries for Cons<Entry<K, V>, T> {
    fn collect_into(out: &mut Vec<(TypeTerm, TypeTerm)>) {
        out.push((K::reify(), V::reify()));
        T::collect_into(out);
    }
}

impl<E: ReifyEntries> TypeMap<E> {
    /// The runtime map with the same entries, in the same order
    pub fn to_runtime() -> TypeLevelResult<eval::TypeMap> {
        let mut entries = Vec::new();
        E::collect_into(&mut entries);
        eval::TypeMap::new(entries)
    }
}

/// Implements [`Reify`] for nominal types, using the type as written.
#[macro_export]
macro_rules! reify_named {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::type_level::Reify for $ty {
            fn reify() -> $crate::eval::TypeTerm {
                $crate::eval::TypeTerm::named(stringify!($ty))
            }
        }
    )*};
}

crate::reify_named!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, ());

macro_rules! reify_literals {
    ($($name:ident: $ty:ty),* $(,)?) => {$(
        impl<const N: $ty> Reify for $name<N> {
            fn reify() -> TypeTerm {
                TypeTerm::Int(N as i128)
            }
        }
    )*};
}

reify_literals! {
    U8: u8,
    U16: u16,
    U32: u32,
    U64: u64,
    Usize: usize,
    I8: i8,
    I16: i16,
    I32: i32,
    I64: i64,
    Isize: isize,
}
