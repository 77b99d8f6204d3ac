//! Cartesian product of two type lists
//!
//! `ProductOf<A, B>` holds one [`Pair`] per ordered combination, grouped by
//! the element of `A` first and then by `B`'s order (row-major):
//!
//! - `product(Nil, B) = Nil`, whatever `B` is
//! - `product(Cons<a, rest>, B) = join(row(a, B), product(rest, B))`

use std::marker::PhantomData;

use super::hlist::{Cons, Nil, TypeList};
use super::join::{Join, Joined};

/// An ordered pair produced by the product
pub struct Pair<A, B>(PhantomData<fn() -> (A, B)>);

/// `Pair<A, b>` for every `b` in `Self`, in order.
pub trait Row<A> {
    type Output: TypeList;
}

impl<A> Row<A> for Nil {
    type Output = Nil;
}

impl<A, H, T> Row<A> for Cons<H, T>
where
    T: Row<A>,
{
    type Output = Cons<Pair<A, H>, T::Output>;
}

/// Cartesian product with `Rhs`
pub trait Product<Rhs> {
    type Output: TypeList;
}

impl<Rhs> Product<Rhs> for Nil {
    type Output = Nil;
}

impl<H, T, Rhs> Product<Rhs> for Cons<H, T>
where
    Rhs: Row<H>,
    T: Product<Rhs>,
    <Rhs as Row<H>>::Output: Join<T::Output>,
{
    type Output = Joined<<Rhs as Row<H>>::Output, T::Output>;
}

/// Every `Pair<a, b>` with `a` from `A` and `b` from `B`, row-major.
pub type ProductOf<A, B> = <A as Product<B>>::Output;
