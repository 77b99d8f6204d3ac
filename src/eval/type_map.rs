//! Runtime type-to-type map

use indexmap::IndexSet;
use tracing::debug;

use super::term::{TermList, TypeTerm};
use crate::type_level::{TypeLevelError, TypeLevelResult};

/// A fixed map from key terms to value terms.
///
/// Built once from its complete entry list. Keys and values are kept as two
/// parallel lists: the value of `keys[i]` is `values[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    keys: TermList,
    values: TermList,
}

impl TypeMap {
    /// Build a map from `(key, value)` entries.
    ///
    /// Keys must be unique so that lookups are unambiguous.
    pub fn new<I>(entries: I) -> TypeLevelResult<Self>
    where
        I: IntoIterator<Item = (TypeTerm, TypeTerm)>,
    {
        let (keys, values): (Vec<_>, Vec<_>) = entries.into_iter().unzip();

        let mut seen = IndexSet::with_capacity(keys.len());
        for key in &keys {
            if !seen.insert(key) {
                return Err(TypeLevelError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }

        Ok(Self {
            keys: keys.into(),
            values: values.into(),
        })
    }

    /// The empty map
    pub fn empty() -> Self {
        Self::default()
    }

    /// Position of `needle` among the keys.
    ///
    /// Linear scan from the front; the first exactly equal key wins.
    pub fn index_of(
        &self,
        needle: &TypeTerm,
    ) -> Option<usize> {
        self.keys.iter().position(|key| key == needle)
    }

    /// The value bound to `needle`.
    ///
    /// A missing key is an error, never a default value.
    pub fn get(
        &self,
        needle: &TypeTerm,
    ) -> TypeLevelResult<&TypeTerm> {
        let index = self
            .index_of(needle)
            .ok_or_else(|| TypeLevelError::LookupMiss {
                key: needle.to_string(),
            })?;
        debug!(key = %needle, index, "type map hit");
        // Keys and values are built from the same entries
        self.values.get(index).ok_or_else(|| TypeLevelError::LookupMiss {
            key: needle.to_string(),
        })
    }

    pub fn contains_key(
        &self,
        needle: &TypeTerm,
    ) -> bool {
        self.index_of(needle).is_some()
    }

    pub fn keys(&self) -> &TermList {
        &self.keys
    }

    pub fn values(&self) -> &TermList {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Entries in construction order
    pub fn iter(&self) -> impl Iterator<Item = (&TypeTerm, &TypeTerm)> {
        self.keys.iter().zip(self.values.iter())
    }
}
