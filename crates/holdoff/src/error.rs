// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

/// The result for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error produced when a strategy is constructed from an invalid
/// [`Config`][crate::Config].
///
/// Construction is the only fallible moment in this crate; once a strategy
/// exists, computing delays never fails. To avoid fix-one-rerun-hit-next
/// cycles, the error carries *every* violated precondition at once rather
/// than the first one found, both in its `Display` output and through
/// [`Error::violations`].
///
/// # Examples
///
/// ```
/// use holdoff::{Config, FullJitter};
///
/// let error = FullJitter::new(Config::new(0, -5)).unwrap_err();
/// assert_eq!(error.violations().len(), 3);
/// ```
#[derive(Debug, thiserror::Error)]
#[error("invalid configuration: {}", list(.violations))]
pub struct Error {
    violations: Vec<Violation>,
}

impl Error {
    pub(crate) fn invalid_config(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns every precondition violation that produced this error.
    ///
    /// The slice is never empty and each violation appears at most once.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

/// A single violated precondition detected while validating a
/// [`Config`][crate::Config].
///
/// New violations may be added over time, so this enum is marked
/// `#[non_exhaustive]`; match with a wildcard arm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation {
    /// The base delay must be positive.
    #[error("base must be positive (got {0})")]
    NonPositiveBase(i64),

    /// The delay cap must be positive.
    #[error("cap must be positive (got {0})")]
    NonPositiveCap(i64),

    /// The strategy draws random numbers but no source was supplied.
    #[error("random source is required but missing")]
    MissingRandomSource,
}

fn list(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
