//! Typewise
//!
//! Compile-time computation over types: a type-to-type map, joining type
//! lists, their cartesian product, and map/reduce over compile-time value
//! lists. Every result is checked when the crate builds; a runtime evaluator
//! mirrors the same algorithms so the results can be reported and compared.
//!
//! # Example
//!
//! ```rust
//! use typewise::tlist;
//! use typewise::type_level::{assert_same, Joined, ProductOf, TypeList};
//!
//! struct A;
//! struct B;
//! struct X;
//!
//! const _: () = assert_same::<Joined<tlist![A, B], tlist![X]>, tlist![A, B, X]>();
//! const _: () = assert!(<ProductOf<tlist![A, B], tlist![X]> as TypeList>::LEN == 2);
//! ```

#![doc(html_root_url = "https://docs.rs/typewise")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod const_eval;
pub mod eval;
pub mod exercises;
pub mod type_level;

// Utility modules
pub mod util;

// Re-exports
pub use exercises::{Exercise, RunSummary};
pub use type_level::{TypeLevelError, TypeLevelResult};

use tracing::debug;

use crate::const_eval::StaticAssertChecker;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = "typewise";

/// Run the runtime battery of the selected exercises (all when empty)
///
/// # Example
///
/// ```
/// use typewise::{run_checks, Exercise};
///
/// let summary = run_checks(&[Exercise::Types], false);
/// assert!(summary.is_success());
/// ```
pub fn run_checks(
    selection: &[Exercise],
    fail_fast: bool,
) -> RunSummary {
    debug!(?selection, fail_fast, "running checks");
    let checker = StaticAssertChecker::with_fail_fast(fail_fast);
    exercises::run(selection, &checker)
}
