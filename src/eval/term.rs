//! Runtime type terms
//!
//! `TypeTerm` is the tagged representation of what the static layer computes:
//! a named type, an integer value, a pair, or a list. Static results are
//! turned into terms with [`crate::type_level::Reify`].

use std::fmt;

use super::arithmetic::Numeric;

/// A type (or compile-time value) as a runtime term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTerm {
    /// A nominal type, compared by name
    Named(String),

    /// An integer value from a value list
    Int(i128),

    /// An ordered pair
    Pair(Box<TypeTerm>, Box<TypeTerm>),

    /// A type list
    List(TermList),
}

impl TypeTerm {
    /// Create a named term
    pub fn named(name: impl Into<String>) -> Self {
        TypeTerm::Named(name.into())
    }

    /// Create an integer value term
    pub fn int<T: Numeric>(value: T) -> Self {
        TypeTerm::Int(value.to_i128())
    }

    /// Create a pair term
    pub fn pair(
        first: TypeTerm,
        second: TypeTerm,
    ) -> Self {
        TypeTerm::Pair(Box::new(first), Box::new(second))
    }

    /// Get the list, if this term is one
    pub fn as_list(&self) -> Option<&TermList> {
        match self {
            TypeTerm::List(list) => Some(list),
            _ => None,
        }
    }

    /// Short name of the term kind, for messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeTerm::Named(_) => "type",
            TypeTerm::Int(_) => "value",
            TypeTerm::Pair(..) => "pair",
            TypeTerm::List(_) => "list",
        }
    }
}

impl fmt::Display for TypeTerm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TypeTerm::Named(name) => write!(f, "{}", name),
            TypeTerm::Int(n) => write!(f, "{}", n),
            TypeTerm::Pair(a, b) => write!(f, "({}, {})", a, b),
            TypeTerm::List(list) => write!(f, "{}", list),
        }
    }
}

impl From<TermList> for TypeTerm {
    fn from(list: TermList) -> Self {
        TypeTerm::List(list)
    }
}

/// An ordered, immutable sequence of terms.
///
/// Every operation returns a new list; the receiver is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TermList {
    items: Vec<TypeTerm>,
}

impl TermList {
    /// The empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// List of named terms
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(TypeTerm::named).collect()
    }

    /// Number of elements (`size`)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeTerm> {
        self.items.iter()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&TypeTerm> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[TypeTerm] {
        &self.items
    }
}

impl FromIterator<TypeTerm> for TermList {
    fn from_iter<I: IntoIterator<Item = TypeTerm>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<TypeTerm>> for TermList {
    fn from(items: Vec<TypeTerm>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a TypeTerm;
    type IntoIter = std::slice::Iter<'a, TypeTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for TermList {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let list = TermList::from(vec![
            TypeTerm::named("A"),
            TypeTerm::pair(TypeTerm::named("B"), TypeTerm::Int(3)),
        ]);
        assert_eq!(list.to_string(), "[A, (B, 3)]");
        assert_eq!(TermList::new().to_string(), "[]");
    }

    #[test]
    fn test_get() {
        let list = TermList::named(["A", "B", "C"]);
        assert_eq!(list.get(1), Some(&TypeTerm::named("B")));
        assert!(list.get(3).is_none());
        assert!(TermList::new().get(0).is_none());
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(TypeTerm::named("A").kind_name(), "type");
        assert_eq!(TypeTerm::from(TermList::new()).kind_name(), "list");
        assert!(TypeTerm::Int(1).as_list().is_none());
    }
}
