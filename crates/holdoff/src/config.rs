// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

use crate::error::{Error, Result, Violation};
use crate::random::RandomSource;

/// Shared configuration for the backoff strategies.
///
/// `base` is the initial delay and `cap` the largest delay a strategy will
/// ever return, both in whatever unit the caller assigns (the crate never
/// interprets the values as a particular unit). Both must be positive.
///
/// The random source feeds the jitter strategies.
/// [`Exponential`][crate::Exponential] ignores it; the other strategies
/// refuse to build without one. Validation happens in the strategy
/// constructors, not here, and reports every problem at once.
///
/// A `Config` is plain data: clone it freely and reuse it to build any
/// number of strategy instances.
///
/// # Examples
///
/// ```
/// use holdoff::{Config, EqualJitter, RandomSource};
///
/// let config = Config::new(100, 10_000).random_source(RandomSource::fast());
/// let strategy = EqualJitter::new(config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    base: i64,
    cap: i64,
    random: Option<RandomSource>,
}

impl Config {
    /// Creates a configuration with the given base delay and delay cap.
    ///
    /// No random source is attached; add one with
    /// [`random_source`][Self::random_source] before building a jitter
    /// strategy.
    #[must_use]
    pub const fn new(base: i64, cap: i64) -> Self {
        Self { base, cap, random: None }
    }

    /// Attaches the random source consumed by the jitter strategies.
    #[must_use]
    pub fn random_source(mut self, source: RandomSource) -> Self {
        self.random = Some(source);
        self
    }

    /// Returns the base delay.
    #[must_use]
    pub const fn base(&self) -> i64 {
        self.base
    }

    /// Returns the delay cap.
    #[must_use]
    pub const fn cap(&self) -> i64 {
        self.cap
    }

    /// Validates `base` and `cap` and hands them out, reporting every
    /// violated precondition in one error.
    pub(crate) fn require_bounds(self) -> Result<(i64, i64)> {
        let violations = self.bound_violations();
        if violations.is_empty() {
            Ok((self.base, self.cap))
        } else {
            Err(Error::invalid_config(violations))
        }
    }

    /// Like [`require_bounds`][Self::require_bounds], but additionally
    /// demands a random source.
    pub(crate) fn require_random(self) -> Result<(i64, i64, RandomSource)> {
        let mut violations = self.bound_violations();
        match self.random {
            Some(random) if violations.is_empty() => Ok((self.base, self.cap, random)),
            Some(_) => Err(Error::invalid_config(violations)),
            None => {
                violations.push(Violation::MissingRandomSource);
                Err(Error::invalid_config(violations))
            }
        }
    }

    fn bound_violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        if self.base <= 0 {
            violations.push(Violation::NonPositiveBase(self.base));
        }

        if self.cap <= 0 {
            violations.push(Violation::NonPositiveCap(self.cap));
        }

        violations
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Config: std::fmt::Debug, Clone, Send, Sync);

    #[test]
    fn builder_carries_values() {
        let config = Config::new(100, 10_000);
        assert_eq!(config.base(), 100);
        assert_eq!(config.cap(), 10_000);
    }

    #[test]
    fn require_bounds_ok() {
        let (base, cap) = Config::new(1, 2).require_bounds().unwrap();
        assert_eq!((base, cap), (1, 2));
    }

    #[test]
    fn require_bounds_reports_both_violations() {
        let error = Config::new(0, -5).require_bounds().unwrap_err();
        assert_eq!(
            error.violations(),
            &[Violation::NonPositiveBase(0), Violation::NonPositiveCap(-5)]
        );
    }

    #[test]
    fn require_random_ok() {
        let config = Config::new(3, 9).random_source(RandomSource::from_fn(|bound| bound - 1));
        let (base, cap, random) = config.require_random().unwrap();
        assert_eq!((base, cap), (3, 9));
        assert_eq!(random.sample(5), 4);
    }

    #[test]
    fn require_random_reports_all_three_violations() {
        let error = Config::new(0, -5).require_random().unwrap_err();
        assert_eq!(
            error.violations(),
            &[
                Violation::NonPositiveBase(0),
                Violation::NonPositiveCap(-5),
                Violation::MissingRandomSource,
            ]
        );
    }

    #[test]
    fn require_random_missing_source_only() {
        let error = Config::new(1, 2).require_random().unwrap_err();
        assert_eq!(error.violations(), &[Violation::MissingRandomSource]);
    }

    #[test]
    fn config_is_reusable() {
        let config = Config::new(5, 50).random_source(RandomSource::from_fn(|_| 0));
        let first = config.clone().require_random().unwrap();
        let second = config.require_random().unwrap();
        assert_eq!((first.0, first.1), (second.0, second.1));
    }
}
