//! Join and cartesian product over term lists

use tracing::debug;

use super::term::{TermList, TypeTerm};

impl TermList {
    /// `self` followed by `other`, both in their original order.
    pub fn join(
        &self,
        other: &TermList,
    ) -> TermList {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// A pair `(head, b)` for every `b` in `self`, in order.
    pub fn row(
        &self,
        head: &TypeTerm,
    ) -> TermList {
        self.row_iter(head).collect()
    }

    /// Cartesian product, row-major by `self`.
    ///
    /// An empty `self` gives an empty product whatever `other` holds. The row
    /// of each head of `self` is appended in order to a single buffer, so
    /// every pair is built once and the stack depth does not grow with
    /// `self`.
    pub fn product(
        &self,
        other: &TermList,
    ) -> TermList {
        debug!(lhs = self.len(), rhs = other.len(), "cartesian product");

        let mut pairs = Vec::with_capacity(self.len() * other.len());
        for head in self {
            pairs.extend(other.row_iter(head));
        }
        pairs.into()
    }

    fn row_iter<'a>(
        &'a self,
        head: &'a TypeTerm,
    ) -> impl Iterator<Item = TypeTerm> + 'a {
        self.iter()
            .map(move |b| TypeTerm::pair(head.clone(), b.clone()))
    }
}
