//! Compile-time value lists
//!
//! A value list is a type list whose elements implement [`Value<T>`] for one
//! value type `T`. Literals are written with the const-generic wrappers
//! (`Usize<3>`, `I32<{ -1 }>`, ...); computed elements are the result types of
//! the operators (`Doubled<V>`, `Plus<A, B>`, ...).
//!
//! - [`MapValues`]: element-wise map with a [`UnaryOp`]
//! - [`Reduce`]: right fold with a [`BinaryOp`], `v1 op (v2 op (v3 op v4))`
//! - [`Sum`]: reduce with [`Add`]
//!
//! ```
//! use typewise::tlist;
//! use typewise::type_level::values::{self, Doubler, Usize};
//!
//! type L = tlist![Usize<1>, Usize<2>, Usize<3>];
//!
//! const _: () = assert!(values::sum::<usize, L>() == 6);
//! const _: () = assert!(values::values_eq::<
//!     usize,
//!     values::Mapped<L, usize, Doubler>,
//!     tlist![Usize<2>, Usize<4>, Usize<6>],
//! >());
//! ```
//!
//! Reducing an empty list does not compile:
//!
//! ```compile_fail
//! use typewise::type_level::{values, Nil};
//! const _: usize = values::sum::<usize, Nil>();
//! ```
//!
//! Neither does reducing elements of another value type:
//!
//! ```compile_fail
//! use typewise::tlist;
//! use typewise::type_level::values::{self, Add, I32};
//! const _: usize = values::reduce::<usize, Add, tlist![I32<1>]>();
//! ```

use std::marker::PhantomData;

use super::hlist::{Cons, Nil, TypeList};

/// A compile-time value of type `T`
pub trait Value<T> {
    const VALUE: T;
}

macro_rules! literals {
    ($($name:ident: $ty:ty),* $(,)?) => {$(
        #[doc = concat!("A `", stringify!($ty), "` literal")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name<const N: $ty>;

        impl<const N: $ty> Value<$ty> for $name<N> {
            const VALUE: $ty = N;
        }
    )*};
}

literals! {
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

/// A unary operator on values of type `T`.
///
/// `Apply<V>` is the value `op(V)`.
pub trait UnaryOp<T> {
    type Apply<V: Value<T>>: Value<T>;
}

/// A binary operator on values of type `T`.
///
/// `Apply<A, B>` is the value `A op B`.
pub trait BinaryOp<T> {
    type Apply<A: Value<T>, B: Value<T>>: Value<T>;
}

/// `V * 2`
pub struct Doubler;
/// `-V`, signed types only
pub struct Negate;
/// `A + B`
pub struct Add;
/// `A - B`
pub struct Sub;
/// `A * B`
pub struct Mul;

pub struct Doubled<V>(PhantomData<fn() -> V>);
pub struct Negated<V>(PhantomData<fn() -> V>);
pub struct Plus<A, B>(PhantomData<fn() -> (A, B)>);
pub struct Minus<A, B>(PhantomData<fn() -> (A, B)>);
pub struct Times<A, B>(PhantomData<fn() -> (A, B)>);

/// Value equality of two lists of `T`, element by element.
///
/// Computed elements are distinct types from literal ones
/// (`Doubled<Usize<1>>` is not `Usize<2>`), so list results are compared by
/// value rather than by type.
pub trait ValueEq<T, Rhs> {
    const EQ: bool;
}

// Arithmetic overflows are const evaluation errors, reported at build time.
macro_rules! arithmetic {
    ($($ty:ty),* $(,)?) => {$(
        impl<V: Value<$ty>> Value<$ty> for Doubled<V> {
            const VALUE: $ty = V::VALUE * 2;
        }

        impl<A: Value<$ty>, B: Value<$ty>> Value<$ty> for Plus<A, B> {
            const VALUE: $ty = A::VALUE + B::VALUE;
        }

        impl<A: Value<$ty>, B: Value<$ty>> Value<$ty> for Minus<A, B> {
            const VALUE: $ty = A::VALUE - B::VALUE;
        }

        impl<A: Value<$ty>, B: Value<$ty>> Value<$ty> for Times<A, B> {
            const VALUE: $ty = A::VALUE * B::VALUE;
        }

        impl UnaryOp<$ty> for Doubler {
            type Apply<V: Value<$ty>> = Doubled<V>;
        }

        impl BinaryOp<$ty> for Add {
            type Apply<A: Value<$ty>, B: Value<$ty>> = Plus<A, B>;
        }

        impl BinaryOp<$ty> for Sub {
            type Apply<A: Value<$ty>, B: Value<$ty>> = Minus<A, B>;
        }

        impl BinaryOp<$ty> for Mul {
            type Apply<A: Value<$ty>, B: Value<$ty>> = Times<A, B>;
        }

        impl ValueEq<$ty, Nil> for Nil {
            const EQ: bool = true;
        }

        impl<H, T> ValueEq<$ty, Cons<H, T>> for Nil {
            const EQ: bool = false;
        }

        impl<H, T> ValueEq<$ty, Nil> for Cons<H, T> {
            const EQ: bool = false;
        }

        impl<H, T, H2, T2> ValueEq<$ty, Cons<H2, T2>> for Cons<H, T>
        where
            H: Value<$ty>,
            H2: Value<$ty>,
            T: ValueEq<$ty, T2>,
        {
            const EQ: bool = H::VALUE == H2::VALUE && T::EQ;
        }
    )*};
}

macro_rules! signed {
    ($($ty:ty),* $(,)?) => {$(
        impl<V: Value<$ty>> Value<$ty> for Negated<V> {
            const VALUE: $ty = -V::VALUE;
        }

        impl UnaryOp<$ty> for Negate {
            type Apply<V: Value<$ty>> = Negated<V>;
        }
    )*};
}

arithmetic!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
signed!(i8, i16, i32, i64, isize);

/// A type list whose elements are all values of `T`.
pub trait ValueList<T>: TypeList {
    /// The elements, in order
    fn values() -> Vec<T>;
}

impl<T> ValueList<T> for Nil {
    fn values() -> Vec<T> {
        Vec::new()
    }
}

impl<T, H, Tl> ValueList<T> for Cons<H, Tl>
where
    H: Value<T>,
    Tl: ValueList<T>,
{
    fn values() -> Vec<T> {
        let mut out = Vec::with_capacity(Self::LEN);
        out.push(H::VALUE);
        out.extend(Tl::values());
        out
    }
}

/// Element-wise map with `F`. Same length, same value type, same order.
pub trait MapValues<T, F: UnaryOp<T>>: ValueList<T> {
    type Output: ValueList<T>;
}

impl<T, F: UnaryOp<T>> MapValues<T, F> for Nil {
    type Output = Nil;
}

impl<T, F, H, Tl> MapValues<T, F> for Cons<H, Tl>
where
    F: UnaryOp<T>,
    H: Value<T>,
    Tl: MapValues<T, F>,
{
    type Output = Cons<F::Apply<H>, Tl::Output>;
}

/// Right fold with `Op`.
///
/// A single element is returned as is and `Op` is never applied. There is
/// no impl for `Nil`: no identity element can be assumed for an arbitrary
/// operator.
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` with `{Op}` as a list of `{T}` values",
    label = "needs a non-empty list of `Value<{T}>` elements",
    note = "reducing an empty list is not supported",
    note = "every element must implement `Value<{T}>`"
)]
pub trait Reduce<T, Op> {
    type Output: Value<T>;
}

impl<T, Op, H> Reduce<T, Op> for Cons<H, Nil>
where
    H: Value<T>,
{
    type Output = H;
}

impl<T, Op, H, H2, Tl> Reduce<T, Op> for Cons<H, Cons<H2, Tl>>
where
    Op: BinaryOp<T>,
    H: Value<T>,
    Cons<H2, Tl>: Reduce<T, Op>,
{
    type Output = Op::Apply<H, <Cons<H2, Tl> as Reduce<T, Op>>::Output>;
}

pub type Mapped<L, T, F> = <L as MapValues<T, F>>::Output;
pub type Reduced<L, T, Op> = <L as Reduce<T, Op>>::Output;
pub type Sum<L, T> = Reduced<L, T, Add>;

/// Value of `V`
pub const fn value<T, V: Value<T>>() -> T {
    V::VALUE
}

/// Right fold of `L` with `Op`
pub const fn reduce<T, Op, L: Reduce<T, Op>>() -> T {
    <L::Output as Value<T>>::VALUE
}

/// Sum of `L`
pub const fn sum<T, L: Reduce<T, Add>>() -> T {
    reduce::<T, Add, L>()
}

/// Whether `L` and `R` hold the same values in the same order
pub const fn values_eq<T, L: ValueEq<T, R>, R>() -> bool {
    L::EQ
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlist;
    use crate::type_level::hlist::assert_same;

    type OneTwoThree = tlist![Usize<1>, Usize<2>, Usize<3>];

    const _: () = assert!(values_eq::<usize, Mapped<OneTwoThree, usize, Doubler>, tlist![Usize<2>, Usize<4>, Usize<6>]>());
    const _: () = assert!(sum::<usize, OneTwoThree>() == 6);
    const _: () = assert!(<Mapped<OneTwoThree, usize, Doubler> as TypeList>::LEN == 3);

    // Right association: 10 - (4 - 3)
    const _: () = assert!(reduce::<i32, Sub, tlist![I32<10>, I32<4>, I32<3>]>() == 9);
    // Two elements: v1 op v2
    const _: () = assert!(reduce::<i32, Sub, tlist![I32<10>, I32<4>]>() == 6);
    const _: () = assert!(reduce::<u64, Mul, tlist![U64<2>, U64<3>, U64<7>]>() == 42);

    // A single element is returned untouched
    const _: () = assert_same::<Reduced<tlist![Usize<5>], usize, Add>, Usize<5>>();

    struct Explode;
    struct Boom<A, B>(PhantomData<(A, B)>);

    impl<A: Value<usize>, B: Value<usize>> Value<usize> for Boom<A, B> {
        const VALUE: usize = {
            let _ = (A::VALUE, B::VALUE);
            panic!("operator applied")
        };
    }

    impl BinaryOp<usize> for Explode {
        type Apply<A: Value<usize>, B: Value<usize>> = Boom<A, B>;
    }

    const _: () = assert!(reduce::<usize, Explode, tlist![Usize<5>]>() == 5);

    #[test]
    fn test_negate() {
        type L = tlist![I64<1>, I64<{ -2 }>, I64<0>];
        assert_eq!(<Mapped<L, i64, Negate> as ValueList<i64>>::values(), vec![-1, 2, 0]);
    }

    #[test]
    fn test_values() {
        assert_eq!(<OneTwoThree as ValueList<usize>>::values(), vec![1, 2, 3]);
        assert_eq!(<Nil as ValueList<u8>>::values(), Vec::<u8>::new());
        assert_eq!(<Mapped<OneTwoThree, usize, Doubler> as ValueList<usize>>::values(), vec![2, 4, 6]);
    }

    #[test]
    fn test_values_eq_lengths() {
        assert!(!values_eq::<u8, tlist![U8<1>], tlist![U8<1>, U8<2>]>());
        assert!(!values_eq::<u8, tlist![U8<1>, U8<2>], tlist![U8<1>]>());
        assert!(!values_eq::<u8, tlist![U8<1>, U8<2>], tlist![U8<1>, U8<3>]>());
        assert!(values_eq::<u8, Nil, Nil>());
    }

    #[test]
    fn test_value_of_computed() {
        assert_eq!(value::<u32, Plus<U32<40>, U32<2>>>(), 42);
        assert_eq!(value::<u32, Doubled<Doubled<U32<3>>>>(), 12);
    }
}
