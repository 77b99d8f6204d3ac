//! The exercises
//!
//! Each exercise carries its compile-time battery as const items (checked
//! whenever the crate builds) and a runtime battery of [`StaticAssert`]s
//! that [`run`] evaluates.

pub mod type_map;
pub mod types;
pub mod values;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::const_eval::{CheckReport, StaticAssert, StaticAssertChecker};

/// One exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    /// Type-to-type map lookup
    TypeMap,
    /// List join and cartesian product
    Types,
    /// Value list map and reduce
    Values,
}

impl Exercise {
    /// All exercises, in order
    pub const ALL: [Exercise; 3] = [Exercise::TypeMap, Exercise::Types, Exercise::Values];

    /// Command line name
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::TypeMap => "type-map",
            Exercise::Types => "types",
            Exercise::Values => "values",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::TypeMap => "A map from types to types",
            Exercise::Types => "Joining type lists and their cartesian product",
            Exercise::Values => "Mapping and reducing value lists",
        }
    }

    /// The runtime battery
    pub fn assertions(&self) -> Vec<StaticAssert> {
        match self {
            Exercise::TypeMap => type_map::assertions(),
            Exercise::Types => types::assertions(),
            Exercise::Values => values::assertions(),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unknown exercise name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown exercise `{0}` (expected one of: type-map, types, values)")]
pub struct UnknownExercise(pub String);

impl FromStr for Exercise {
    type Err = UnknownExercise;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Exercise::ALL
            .into_iter()
            .find(|ex| ex.name() == s)
            .ok_or_else(|| UnknownExercise(s.to_string()))
    }
}

/// Reports of a run, in the order the exercises ran
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: IndexMap<Exercise, CheckReport>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.reports.values().all(CheckReport::is_success)
    }

    /// All reports folded together
    pub fn totals(&self) -> CheckReport {
        let mut total = CheckReport::default();
        for report in self.reports.values() {
            total.merge(report.clone());
        }
        total
    }
}

/// Run the runtime batteries of `selection` (all exercises when empty).
///
/// With a fail-fast checker the first failure stops the run; assertions of
/// the exercises not reached are counted as skipped.
pub fn run(
    selection: &[Exercise],
    checker: &StaticAssertChecker,
) -> RunSummary {
    let selection: Vec<Exercise> = if selection.is_empty() {
        Exercise::ALL.to_vec()
    } else {
        // Keep the first occurrence of each
        let mut seen = IndexMap::new();
        for ex in selection {
            seen.entry(*ex).or_insert(());
        }
        seen.into_keys().collect()
    };

    let mut summary = RunSummary::default();
    let mut stopped = false;

    for ex in selection {
        let asserts = ex.assertions();
        let report = if stopped {
            CheckReport {
                skipped: asserts.len(),
                ..CheckReport::default()
            }
        } else {
            info!(exercise = %ex, assertions = asserts.len(), "running exercise");
            checker.check_all(&asserts)
        };

        if checker.fail_fast() && !report.failures.is_empty() {
            stopped = true;
        }
        summary.reports.insert(ex, report);
    }

    summary
}
