//! Type list concatenation
//!
//! `Joined<A, B>` holds the elements of `A` in order followed by the
//! elements of `B` in order. Nothing is filtered, deduplicated or reordered.

use super::hlist::{Cons, Nil, TypeList};

/// Concatenation with `Rhs`
pub trait Join<Rhs> {
    type Output: TypeList;
}

impl<Rhs: TypeList> Join<Rhs> for Nil {
    type Output = Rhs;
}

impl<H, T, Rhs> Join<Rhs> for Cons<H, T>
where
    T: Join<Rhs>,
{
    type Output = Cons<H, T::Output>;
}

/// `A` followed by `B`
pub type Joined<A, B> = <A as Join<B>>::Output;
