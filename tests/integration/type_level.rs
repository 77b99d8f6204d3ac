//! The static layer used from outside the crate

use std::marker::PhantomData;

use typewise::eval::{TermList, TypeTerm, UnaryArith, ValueList as RuntimeList};
use typewise::type_level::values::{self, I64, U32};
use typewise::type_level::{
    assert_same, is_same, Get, Joined, Mapped, Negate, ProductOf, Reify, ReifyList, TypeList,
    UnaryOp, Value, ValueList, S, Z,
};
use typewise::{reify_named, tlist, type_map};

struct Red;
struct Green;
struct Blue;
struct Rgb;
struct Hsl;

reify_named!(Red, Green, Blue, Rgb, Hsl);

type Channels = type_map! {
    Red => u8,
    Green => u16,
    Blue => u32,
};

type Spaces = tlist![Rgb, Hsl];
type Colors = tlist![Red, Green, Blue];

const _: () = assert_same::<Get<Channels, Blue, S<S<Z>>>, u32>();
const _: PhantomData<u16> = Channels::get::<Green, _>();
const _: () = assert!(<Joined<Colors, Spaces> as TypeList>::LEN == 5);
const _: () = assert!(<ProductOf<Spaces, Colors> as TypeList>::LEN == 6);

/// `V * V`
struct Square;
struct Squared<V>(PhantomData<fn() -> V>);

impl<V: Value<u32>> Value<u32> for Squared<V> {
    const VALUE: u32 = V::VALUE * V::VALUE;
}

impl UnaryOp<u32> for Square {
    type Apply<V: Value<u32>> = Squared<V>;
}

type Squares = Mapped<tlist![U32<1>, U32<2>, U32<3>], u32, Square>;

const _: () = assert!(values::values_eq::<u32, Squares, tlist![U32<1>, U32<4>, U32<9>]>());
const _: () = assert!(values::sum::<u32, Squares>() == 14);

#[test]
fn test_lookup_from_outside() {
    assert!(is_same::<Get<Channels, Red, Z>, u8>());
    assert!(!is_same::<Get<Channels, Red, Z>, u16>());
    assert_eq!(Channels::position::<Green, _>(), 1);
    assert_eq!(Channels::LEN, 3);
}

#[test]
fn test_runtime_map_agrees() {
    let runtime = Channels::to_runtime().unwrap();
    assert_eq!(runtime.len(), 3);
    assert_eq!(runtime.get(&TypeTerm::named("Green")).unwrap(), &TypeTerm::named("u16"));
    assert!(runtime.get(&TypeTerm::named("Alpha")).is_err());
}

#[test]
fn test_product_agrees() {
    let static_result = <ProductOf<Spaces, Colors>>::reify();
    let runtime = Spaces::reify_list().product(&Colors::reify_list());
    assert_eq!(static_result, TypeTerm::List(runtime.clone()));

    let first: Vec<String> = runtime.iter().take(3).map(|t| t.to_string()).collect();
    assert_eq!(first, ["(Rgb, Red)", "(Rgb, Green)", "(Rgb, Blue)"]);
}

#[test]
fn test_join_agrees() {
    let static_result = <Joined<Colors, Spaces>>::reify();
    let runtime = Colors::reify_list().join(&Spaces::reify_list());
    assert_eq!(static_result, TypeTerm::from(runtime));
    assert_eq!(<Joined<tlist![], tlist![]>>::reify(), TypeTerm::from(TermList::new()));
}

#[test]
fn test_custom_operator() {
    assert_eq!(<Squares as ValueList<u32>>::values(), [1, 4, 9]);
}

#[test]
fn test_negate_agrees() {
    type Signed = tlist![I64<3>, I64<{ -7 }>, I64<0>];

    let static_result = <Mapped<Signed, i64, Negate> as ValueList<i64>>::values();
    let runtime = RuntimeList::from(<Signed as ValueList<i64>>::values())
        .map(UnaryArith::Negate)
        .unwrap();
    assert_eq!(static_result, [-3, 7, 0]);
    assert_eq!(runtime.as_slice(), static_result.as_slice());
}
