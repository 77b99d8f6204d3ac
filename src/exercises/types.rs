//! Exercise 2a: joining type lists and their cartesian product

use crate::const_eval::StaticAssert;
use crate::eval::TermList;
use crate::tlist;
use crate::type_level::{assert_same, Joined, Nil, Pair, ProductOf, Reify, ReifyList, TypeList};

// Some structs for testing purposes
pub struct A;
pub struct B;
pub struct C;
pub struct D;
pub struct E;

pub struct W;
pub struct X;
pub struct Y;
pub struct Z;

crate::reify_named!(A, B, C, D, E, W, X, Y, Z);

pub type Abc = tlist![A, B, C];
pub type Xyz = tlist![X, Y, Z];
pub type Abcd = tlist![A, B, C, D];
pub type Wxyz = tlist![W, X, Y, Z];

const _: () = assert_same::<Joined<Abc, Xyz>, tlist![A, B, C, X, Y, Z]>();

const _: () = assert!(<ProductOf<Abcd, Wxyz> as TypeList>::LEN == 16);

const _: () = assert_same::<
    ProductOf<Abcd, Wxyz>,
    tlist![
        Pair<A, W>, Pair<A, X>, Pair<A, Y>, Pair<A, Z>, // A
        Pair<B, W>, Pair<B, X>, Pair<B, Y>, Pair<B, Z>, // B
        Pair<C, W>, Pair<C, X>, Pair<C, Y>, Pair<C, Z>, // C
        Pair<D, W>, Pair<D, X>, Pair<D, Y>, Pair<D, Z>, // D
    ],
>();

const _: () = assert_same::<ProductOf<Nil, Wxyz>, Nil>();

/// The runtime battery
pub fn assertions() -> Vec<StaticAssert> {
    let abc = Abc::reify_list();
    let xyz = Xyz::reify_list();
    let abcd = Abcd::reify_list();
    let wxyz = Wxyz::reify_list();
    let e = TermList::from(vec![E::reify()]);

    let product = abcd.product(&wxyz);

    vec![
        StaticAssert::same(
            Ok(<Joined<Abc, Xyz>>::reify()),
            Ok(abc.join(&xyz).into()),
            "Joining list<A, B, C> and list<X, Y, Z> should yield list<A, B, C, X, Y, Z>",
        ),
        StaticAssert::same(
            Ok(abc.join(&TermList::new()).into()),
            Ok(abc.clone().into()),
            "Joining an empty list on the right changes nothing",
        ),
        StaticAssert::same(
            Ok(TermList::new().join(&abc).into()),
            Ok(abc.clone().into()),
            "Joining an empty list on the left changes nothing",
        ),
        StaticAssert::same(
            Ok(abc.join(&xyz).join(&e).into()),
            Ok(abc.join(&xyz.join(&e)).into()),
            "Join is associative",
        ),
        StaticAssert::holds(
            <ProductOf<Abcd, Wxyz> as TypeList>::LEN == 16,
            "A cartesian_product between two lists of size 4 should have size 16",
        ),
        StaticAssert::holds(
            product.len() == abcd.len() * wxyz.len(),
            "The runtime product has |A| * |B| pairs",
        ),
        StaticAssert::same(
            Ok(<ProductOf<Abcd, Wxyz>>::reify()),
            Ok(product.into()),
            "The cartesian_product of {A, B, C, D} and {W, X, Y, Z} should be \
             {(A, W), (A, X), (A, Y), (A, Z), (B, W), ..., (D, Z)}",
        ),
        StaticAssert::same(
            Ok(<ProductOf<Nil, Wxyz>>::reify()),
            Ok(TermList::new().product(&wxyz).into()),
            "The cartesian_product of an empty list and any other list is an empty list",
        ),
        StaticAssert::holds(
            abcd.product(&TermList::new()).is_empty(),
            "The cartesian_product of any list and an empty list is an empty list",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::const_eval::StaticAssertChecker;

    #[test]
    fn test_battery_passes() {
        let report = StaticAssertChecker::new().check_all(&assertions());
        assert!(report.is_success(), "{:?}", report.failures);
        assert_eq!(report.passed.len(), 9);
    }

    #[test]
    fn test_product_rows() {
        let product = Abcd::reify_list().product(&Wxyz::reify_list());
        let first_row: Vec<String> = product.iter().take(4).map(|t| t.to_string()).collect();
        assert_eq!(first_row, ["(A, W)", "(A, X)", "(A, Y)", "(A, Z)"]);
    }
}
