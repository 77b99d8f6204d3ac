//! Exercise 2b: mapping and reducing compile-time value lists

use crate::const_eval::StaticAssert;
use crate::eval::{ArithOp, TypeTerm, UnaryArith, ValueList as RuntimeList};
use crate::tlist;
use crate::type_level::values::{
    reduce, sum, values_eq, Add, Doubler, Mapped, Sub, Usize, ValueList, I32,
};
use crate::type_level::ErrorKind;

pub type OneTwoThree = tlist![Usize<1>, Usize<2>, Usize<3>];
pub type TwoFourSix = tlist![Usize<2>, Usize<4>, Usize<6>];
pub type Five = tlist![Usize<5>];
pub type TenFourThree = tlist![I32<10>, I32<4>, I32<3>];

const _: () = assert!(values_eq::<usize, Mapped<OneTwoThree, usize, Doubler>, TwoFourSix>());
const _: () = assert!(sum::<usize, OneTwoThree>() == 6);
const _: () = assert!(reduce::<usize, Add, Five>() == 5);
const _: () = assert!(reduce::<i32, Sub, TenFourThree>() == 9);

/// The runtime battery
pub fn assertions() -> Vec<StaticAssert> {
    let one_two_three = RuntimeList::from(<OneTwoThree as ValueList<usize>>::values());
    let mapped = RuntimeList::from(<Mapped<OneTwoThree, usize, Doubler> as ValueList<usize>>::values());
    let ten_four_three = RuntimeList::from(<TenFourThree as ValueList<i32>>::values());

    vec![
        StaticAssert::holds(
            values_eq::<usize, Mapped<OneTwoThree, usize, Doubler>, TwoFourSix>(),
            "The list is doubled",
        ),
        StaticAssert::same(
            one_two_three.map(UnaryArith::Double).map(|l| l.to_term()),
            Ok(mapped.to_term()),
            "The runtime map agrees with the static map",
        ),
        StaticAssert::holds(mapped.len() == one_two_three.len(), "Map preserves the length"),
        StaticAssert::holds(sum::<usize, OneTwoThree>() == 6, "Sum of {1, 2, 3} is 6"),
        StaticAssert::same(
            one_two_three.sum().map(TypeTerm::int),
            Ok(TypeTerm::int(6usize)),
            "The runtime sum of {1, 2, 3} is 6",
        ),
        StaticAssert::holds(
            reduce::<usize, Add, Five>() == 5,
            "Reducing a single element returns it",
        ),
        StaticAssert::holds(
            reduce::<i32, Sub, TenFourThree>() == 9,
            "Reduction is right associative: 10 - (4 - 3)",
        ),
        StaticAssert::same(
            ten_four_three.reduce(ArithOp::Sub).map(TypeTerm::int),
            Ok(TypeTerm::int(9i32)),
            "The runtime reduction is right associative",
        ),
        StaticAssert::fails(
            RuntimeList::<usize>::new(Vec::new()).sum().map(TypeTerm::int),
            ErrorKind::EmptyReduction,
            "reducing an empty list is not supported",
        ),
    ]
}
