//! Property tests for the runtime evaluator

use proptest::prelude::*;
use typewise::eval::{ArithOp, TermList, TypeTerm, UnaryArith, ValueList};
use typewise::type_level::ErrorKind;

/// Strategy for short lists of named terms
fn term_list_strategy() -> impl Strategy<Value = TermList> {
    prop::collection::vec("[A-Z][a-z]{0,3}", 0..6).prop_map(TermList::named)
}

/// Strategy for value lists that cannot overflow when doubled or summed
fn value_list_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 0..12)
}

proptest! {
    #[test]
    fn join_identity(list in term_list_strategy()) {
        prop_assert_eq!(list.join(&TermList::new()), list.clone());
        prop_assert_eq!(TermList::new().join(&list), list);
    }

    #[test]
    fn join_associative(
        a in term_list_strategy(),
        b in term_list_strategy(),
        c in term_list_strategy(),
    ) {
        prop_assert_eq!(a.join(&b).join(&c), a.join(&b.join(&c)));
    }

    #[test]
    fn join_length(a in term_list_strategy(), b in term_list_strategy()) {
        prop_assert_eq!(a.join(&b).len(), a.len() + b.len());
    }

    #[test]
    fn product_size(a in term_list_strategy(), b in term_list_strategy()) {
        prop_assert_eq!(a.product(&b).len(), a.len() * b.len());
    }

    #[test]
    fn product_row_major(a in term_list_strategy(), b in term_list_strategy()) {
        let product = a.product(&b);
        let mut expected = Vec::new();
        for x in &a {
            for y in &b {
                expected.push(TypeTerm::pair(x.clone(), y.clone()));
            }
        }
        prop_assert_eq!(product, TermList::from(expected));
    }

    #[test]
    fn map_preserves_length(values in value_list_strategy()) {
        let list = ValueList::new(values.clone());
        let doubled = list.map(UnaryArith::Double).unwrap();
        prop_assert_eq!(doubled.len(), list.len());
        for (v, d) in values.iter().zip(doubled.as_slice()) {
            prop_assert_eq!(*d, v * 2);
        }
    }

    #[test]
    fn reduce_is_right_fold(values in value_list_strategy()) {
        let list = ValueList::new(values.clone());
        let reduced = list.reduce(ArithOp::Sub);

        match values.split_last() {
            None => {
                prop_assert_eq!(reduced.unwrap_err().kind(), ErrorKind::EmptyReduction);
            }
            Some((last, init)) => {
                let expected = init.iter().rev().fold(*last, |acc, v| v - acc);
                prop_assert_eq!(reduced.unwrap(), expected);
            }
        }
    }

    #[test]
    fn sum_matches_iter(values in prop::collection::vec(-1_000_000i64..1_000_000, 1..12)) {
        let list = ValueList::new(values.clone());
        prop_assert_eq!(list.sum().unwrap(), values.iter().sum::<i64>());
    }
}
