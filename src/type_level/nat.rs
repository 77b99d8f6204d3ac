//! Type-level natural numbers
//!
//! - `Z`: zero
//! - `S<N>`: successor of `N`
//!
//! Used as positions into type lists; [`Nat::VALUE`] recovers the number.

use std::marker::PhantomData;

/// Zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// Successor: `S<N> = N + 1`
pub struct S<N>(PhantomData<N>);

/// A type-level natural number.
pub trait Nat {
    /// Value-level equivalent
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<Z>>::VALUE, 1);
        assert_eq!(<S<S<S<Z>>>>::VALUE, 3);
    }
}
