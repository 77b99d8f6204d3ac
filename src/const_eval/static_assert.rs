//! Static assertions, re-checked at runtime
//!
//! Each exercise states its assertions twice: once as const items that stop
//! the build, and once as [`StaticAssert`] records that the checker evaluates
//! against the runtime evaluator. The records give the CLI something to
//! report and catch any disagreement between the two layers.
//!
//! Conditions:
//! - `Same(lhs, rhs)`: both sides evaluate to the same term
//! - `Distinct(lhs, rhs)`: both evaluate, to different terms
//! - `Fails(expr, kind)`: evaluation fails with an error of `kind`
//! - `Holds(bool)`: a fact computed by the static layer

use tracing::{debug, warn};

use crate::eval::TypeTerm;
use crate::type_level::{ErrorKind, TypeLevelError, TypeLevelResult};

/// An evaluated side of a condition
pub type Evaluated = TypeLevelResult<TypeTerm>;

/// Assertion condition
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Same(Evaluated, Evaluated),
    Distinct(Evaluated, Evaluated),
    Fails(Evaluated, ErrorKind),
    Holds(bool),
}

impl Condition {
    /// Short rendering for messages
    pub fn describe(&self) -> String {
        fn side(value: &Evaluated) -> String {
            match value {
                Ok(term) => term.to_string(),
                Err(e) => format!("<{}>", e.kind()),
            }
        }

        match self {
            Condition::Same(lhs, rhs) => format!("{} == {}", side(lhs), side(rhs)),
            Condition::Distinct(lhs, rhs) => format!("{} != {}", side(lhs), side(rhs)),
            Condition::Fails(value, kind) => format!("{} fails with {}", side(value), kind),
            Condition::Holds(b) => b.to_string(),
        }
    }
}

/// A single assertion
#[derive(Debug, Clone, PartialEq)]
pub struct StaticAssert {
    /// The condition to check
    pub condition: Condition,
    /// What the assertion means, e.g. "A should map to int"
    pub message: String,
}

impl StaticAssert {
    /// Create a new static assertion
    pub fn new(
        condition: Condition,
        message: impl Into<String>,
    ) -> Self {
        StaticAssert {
            condition,
            message: message.into(),
        }
    }

    pub fn same(
        lhs: Evaluated,
        rhs: Evaluated,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Condition::Same(lhs, rhs), message)
    }

    pub fn distinct(
        lhs: Evaluated,
        rhs: Evaluated,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Condition::Distinct(lhs, rhs), message)
    }

    pub fn fails(
        value: Evaluated,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Condition::Fails(value, kind), message)
    }

    pub fn holds(
        fact: bool,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Condition::Holds(fact), message)
    }
}

/// Static assertion errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StaticAssertError {
    /// The condition evaluated to false
    #[error("static assertion failed: {condition} - {message}")]
    AssertionFailed { condition: String, message: String },

    /// A side that should have evaluated failed instead
    #[error("evaluation failed: {source} - {message}")]
    EvaluationFailed {
        source: TypeLevelError,
        message: String,
    },

    /// Expected a failure, got a result
    #[error("expected {expected}, evaluated to {found} - {message}")]
    UnexpectedSuccess {
        expected: ErrorKind,
        found: TypeTerm,
        message: String,
    },

    /// Failed, but with a different kind of error
    #[error("expected {expected}, failed with {found} - {message}")]
    WrongError {
        expected: ErrorKind,
        found: TypeLevelError,
        message: String,
    },
}

/// Outcome of a batch of assertions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Messages of the assertions that held
    pub passed: Vec<String>,
    pub failures: Vec<StaticAssertError>,
    /// Assertions not run because of fail-fast
    pub skipped: usize,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failures.len() + self.skipped
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.skipped == 0
    }

    /// Fold another report into this one
    pub fn merge(
        &mut self,
        other: CheckReport,
    ) {
        self.passed.extend(other.passed);
        self.failures.extend(other.failures);
        self.skipped += other.skipped;
    }
}

/// Static assertion checker
#[derive(Debug, Clone, Default)]
pub struct StaticAssertChecker {
    /// Stop at the first failure
    fail_fast: bool,
}

impl StaticAssertChecker {
    /// Create a new checker
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_fast(fail_fast: bool) -> Self {
        Self { fail_fast }
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Check one assertion
    pub fn check(
        &self,
        assert: &StaticAssert,
    ) -> Result<(), StaticAssertError> {
        let failed = || StaticAssertError::AssertionFailed {
            condition: assert.condition.describe(),
            message: assert.message.clone(),
        };

        match &assert.condition {
            Condition::Same(lhs, rhs) => {
                let (lhs, rhs) = self.evaluate_pair(lhs, rhs, &assert.message)?;
                if lhs == rhs {
                    Ok(())
                } else {
                    Err(failed())
                }
            }
            Condition::Distinct(lhs, rhs) => {
                let (lhs, rhs) = self.evaluate_pair(lhs, rhs, &assert.message)?;
                if lhs != rhs {
                    Ok(())
                } else {
                    Err(failed())
                }
            }
            Condition::Fails(value, expected) => match value {
                Ok(term) => Err(StaticAssertError::UnexpectedSuccess {
                    expected: *expected,
                    found: term.clone(),
                    message: assert.message.clone(),
                }),
                Err(e) if e.kind() == *expected => Ok(()),
                Err(e) => Err(StaticAssertError::WrongError {
                    expected: *expected,
                    found: e.clone(),
                    message: assert.message.clone(),
                }),
            },
            Condition::Holds(true) => Ok(()),
            Condition::Holds(false) => Err(failed()),
        }
    }

    /// Check a batch, in order
    pub fn check_all(
        &self,
        asserts: &[StaticAssert],
    ) -> CheckReport {
        let mut report = CheckReport::default();

        for (i, assert) in asserts.iter().enumerate() {
            match self.check(assert) {
                Ok(()) => {
                    debug!(message = %assert.message, "assertion holds");
                    report.passed.push(assert.message.clone());
                }
                Err(e) => {
                    warn!("{}", e);
                    report.failures.push(e);
                    if self.fail_fast {
                        report.skipped = asserts.len() - i - 1;
                        break;
                    }
                }
            }
        }

        report
    }

    fn evaluate_pair<'a>(
        &self,
        lhs: &'a Evaluated,
        rhs: &'a Evaluated,
        message: &str,
    ) -> Result<(&'a TypeTerm, &'a TypeTerm), StaticAssertError> {
        let evaluated = |value: &'a Evaluated| {
            value
                .as_ref()
                .map_err(|e| StaticAssertError::EvaluationFailed {
                    source: e.clone(),
                    message: message.to_string(),
                })
        };
        Ok((evaluated(lhs)?, evaluated(rhs)?))
    }
}
