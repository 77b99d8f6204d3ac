//! Assertion checking
//!
//! Runtime counterpart of the compile-time assertions in the exercises.

pub mod static_assert;

pub use static_assert::{
    CheckReport, Condition, Evaluated, StaticAssert, StaticAssertChecker, StaticAssertError,
};
