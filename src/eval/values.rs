//! Runtime value lists: map and right fold

use tracing::debug;

use super::arithmetic::{ArithOp, Numeric, UnaryArith};
use super::term::{TermList, TypeTerm};
use crate::type_level::{TypeLevelError, TypeLevelResult};

/// An ordered, immutable list of values of one type `T`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValueList<T> {
    items: Vec<T>,
}

impl<T> ValueList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Element-wise map; same length, same order
    pub fn map_with<F>(
        &self,
        f: F,
    ) -> ValueList<T>
    where
        F: Fn(&T) -> T,
    {
        self.items.iter().map(f).collect()
    }

    /// Right fold: `v1 op (v2 op (v3 op v4))`.
    ///
    /// A single element is returned without calling `f`. An empty list is an
    /// `EmptyReduction` error naming `op`.
    pub fn try_reduce_with<F>(
        &self,
        op: &str,
        f: F,
    ) -> TypeLevelResult<T>
    where
        T: Clone,
        F: Fn(&T, T) -> TypeLevelResult<T>,
    {
        let mut rev = self.items.iter().rev();
        let last = rev.next().ok_or_else(|| TypeLevelError::EmptyReduction {
            op: op.to_string(),
        })?;
        rev.try_fold(last.clone(), |acc, v| f(v, acc))
    }

    /// [`ValueList::try_reduce_with`] for an operator that cannot fail
    pub fn reduce_with<F>(
        &self,
        op: &str,
        f: F,
    ) -> TypeLevelResult<T>
    where
        T: Clone,
        F: Fn(&T, T) -> T,
    {
        self.try_reduce_with(op, |v, acc| Ok(f(v, acc)))
    }
}

impl<T: Numeric> ValueList<T> {
    /// Map with an arithmetic operator
    pub fn map(
        &self,
        op: UnaryArith,
    ) -> TypeLevelResult<ValueList<T>> {
        debug!(op = op.name(), len = self.len(), "map value list");
        self.items.iter().map(|v| op.apply(*v)).collect()
    }

    /// Right fold with an arithmetic operator
    pub fn reduce(
        &self,
        op: ArithOp,
    ) -> TypeLevelResult<T> {
        debug!(op = op.name(), len = self.len(), "reduce value list");
        self.try_reduce_with(op.name(), |v, acc| op.apply(*v, acc))
    }

    /// `reduce` with addition
    pub fn sum(&self) -> TypeLevelResult<T> {
        self.reduce(ArithOp::Add)
    }

    /// The list as a term of integer values
    pub fn to_term(&self) -> TypeTerm {
        TypeTerm::List(
            self.items
                .iter()
                .map(|v| TypeTerm::Int(v.to_i128()))
                .collect::<TermList>(),
        )
    }
}

impl<T> FromIterator<T> for ValueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for ValueList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}
