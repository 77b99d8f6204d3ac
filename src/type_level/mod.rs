//! Type-level computation
//!
//! Everything in this module is evaluated by the type checker:
//! - Type lists (`Nil`, `Cons`) and their length
//! - Type-to-type maps with positional lookup
//! - List join and cartesian product
//! - Compile-time value lists with map and right fold
//!
//! A computation that cannot be resolved (a missing map key, reducing an
//! empty list) is a build failure. [`TypeLevelError`] is the runtime
//! counterpart used by [`crate::eval`].

pub mod hlist;
pub mod join;
pub mod nat;
pub mod product;
pub mod reify;
pub mod type_map;
pub mod values;

// Re-export the main types
pub use hlist::{assert_same, is_same, Cons, Nil, Same, TypeList};
pub use join::{Join, Joined};
pub use nat::{Nat, S, Z};
pub use product::{Pair, Product, ProductOf, Row};
pub use reify::{Reify, ReifyEntries, ReifyList};
pub use type_map::{At, Entries, Entry, Find, Get, Lookup, TypeMap};
pub use values::{
    Add, BinaryOp, Doubler, MapValues, Mapped, Mul, Negate, Reduce, Reduced, Sub, Sum, UnaryOp,
    Value, ValueEq, ValueList,
};

/// Errors raised by the runtime evaluator.
///
/// The two fatal kinds of the static layer (`LookupMiss`, `EmptyReduction`)
/// have a variant each; the others only exist at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeLevelError {
    #[error("requested key type `{key}` not present in map")]
    LookupMiss { key: String },

    #[error("reducing an empty list is not supported (operator `{op}`)")]
    EmptyReduction { op: String },

    #[error("key type `{key}` appears more than once in map")]
    DuplicateKey { key: String },

    #[error("arithmetic overflow in `{op}`")]
    Overflow { op: String },
}

/// Discriminant of [`TypeLevelError`], used where an assertion expects a
/// particular failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    LookupMiss,
    EmptyReduction,
    DuplicateKey,
    Overflow,
}

impl TypeLevelError {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LookupMiss { .. } => ErrorKind::LookupMiss,
            Self::EmptyReduction { .. } => ErrorKind::EmptyReduction,
            Self::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Self::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ErrorKind::LookupMiss => write!(f, "LookupMiss"),
            ErrorKind::EmptyReduction => write!(f, "EmptyReduction"),
            ErrorKind::DuplicateKey => write!(f, "DuplicateKey"),
            ErrorKind::Overflow => write!(f, "Overflow"),
        }
    }
}

/// Type-level computation result
pub type TypeLevelResult<T> = Result<T, TypeLevelError>;
