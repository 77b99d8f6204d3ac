//! Runtime evaluator
//!
//! Mirrors the type-level algorithms over runtime terms:
//! - term: `TypeTerm`, `TermList`
//! - type_map: keyed lookup with `LookupMiss`
//! - list: join and cartesian product
//! - values: map and right fold with `EmptyReduction`
//!
//! Used by the exercise battery to check the static results after the
//! build, and usable on its own for lists only known at runtime.

pub mod arithmetic;
pub mod list;
pub mod term;
pub mod type_map;
pub mod values;

// Re-export the main types
pub use arithmetic::{ArithOp, Numeric, UnaryArith};
pub use term::{TermList, TypeTerm};
pub use type_map::TypeMap;
pub use values::ValueList;
