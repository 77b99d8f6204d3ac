//! Exercise 1: a map from types to types
//!
//! `MyMap` binds `A` to `i32` and `B` to `f32`. The const items below are
//! the build-time battery; [`assertions`] repeats it at runtime and adds
//! the lookup-miss cases, which can only be observed at runtime.

use std::marker::PhantomData;

use crate::const_eval::{Evaluated, StaticAssert};
use crate::eval::{TypeMap as RuntimeMap, TypeTerm};
use crate::type_level::{assert_same, is_same, ErrorKind, Get, Reify, S, Z};

// Some dummy structs to use as keys
pub struct A;
pub struct B;
pub struct C;

crate::reify_named!(A, B, C);

pub type MyMap = crate::type_map! {
    A => i32,
    B => f32,
};

const _: () = assert_same::<Get<MyMap, A, Z>, i32>();
const _: () = assert_same::<Get<MyMap, B, S<Z>>, f32>();
const _: PhantomData<i32> = MyMap::get::<A, _>();
const _: PhantomData<f32> = MyMap::get::<B, _>();
const _: () = assert!(MyMap::position::<B, _>() == 1);

fn reified<V: Reify>(_: PhantomData<V>) -> TypeTerm {
    V::reify()
}

/// The runtime battery
pub fn assertions() -> Vec<StaticAssert> {
    let map = MyMap::to_runtime();
    let get = |key: TypeTerm| -> Evaluated {
        match &map {
            Ok(map) => map.get(&key).cloned(),
            Err(e) => Err(e.clone()),
        }
    };

    let a = A::reify();
    let b = B::reify();

    vec![
        // The static lookup
        StaticAssert::holds(is_same::<Get<MyMap, A, Z>, i32>(), "A should map to int"),
        StaticAssert::holds(!is_same::<Get<MyMap, A, Z>, f32>(), "A should not map to float"),
        StaticAssert::holds(!is_same::<Get<MyMap, A, Z>, A>(), "A should not map to A"),
        StaticAssert::holds(is_same::<Get<MyMap, B, S<Z>>, f32>(), "B should map to float"),
        StaticAssert::holds(!is_same::<Get<MyMap, B, S<Z>>, i32>(), "B should not map to int"),
        StaticAssert::holds(!is_same::<Get<MyMap, B, S<Z>>, A>(), "B should not map to A"),
        // The runtime lookup
        StaticAssert::same(get(a.clone()), Ok(i32::reify()), "A should map to int"),
        StaticAssert::distinct(get(a.clone()), Ok(f32::reify()), "A should not map to float"),
        StaticAssert::distinct(get(a.clone()), Ok(a.clone()), "A should not map to A"),
        StaticAssert::same(get(b.clone()), Ok(f32::reify()), "B should map to float"),
        StaticAssert::distinct(get(b.clone()), Ok(i32::reify()), "B should not map to int"),
        StaticAssert::distinct(get(b.clone()), Ok(a.clone()), "B should not map to A"),
        // Both agree
        StaticAssert::same(
            Ok(reified(MyMap::get::<A, _>())),
            get(a.clone()),
            "static and runtime lookups of A agree",
        ),
        StaticAssert::same(
            Ok(reified(MyMap::get::<B, _>())),
            get(b),
            "static and runtime lookups of B agree",
        ),
        // Misses
        StaticAssert::fails(get(C::reify()), ErrorKind::LookupMiss, "C is not a key of the map"),
        StaticAssert::fails(
            RuntimeMap::empty().get(&a).cloned(),
            ErrorKind::LookupMiss,
            "an empty map has no keys",
        ),
    ]
}
