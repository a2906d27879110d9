// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

//! The backoff strategies and the [`Strategy`] trait they implement.

mod decorrelated;
mod equal;
mod exponential;
mod full;

pub use decorrelated::DecorrelatedJitter;
pub use equal::EqualJitter;
pub use exponential::Exponential;
pub use full::FullJitter;

/// A backoff strategy producing the delay before a retry attempt.
///
/// All four strategies share the same configuration shape and the same
/// capped exponential growth curve ([`exp_cap`][crate::exp_cap]); they
/// differ in how much randomness they layer on top of it:
///
/// | Strategy | Delay | Random source | State |
/// |----------|-------|---------------|-------|
/// | [`FullJitter`] | `U[0, exp_cap)` | required | none |
/// | [`EqualJitter`] | `exp_cap/2 + U[0, exp_cap - exp_cap/2)` | required | none |
/// | [`Exponential`] | `exp_cap` exactly | ignored | none |
/// | [`DecorrelatedJitter`] | `U[base, min(3 * previous, cap))` | required | previous delay |
///
/// The method takes `&mut self` because [`DecorrelatedJitter`] updates
/// internal state on every call; the stateless strategies simply never
/// touch theirs. The trait is object safe, so heterogeneous strategies can
/// live behind `Box<dyn Strategy>`.
///
/// # Examples
///
/// ```
/// use holdoff::{Config, Exponential, FullJitter, RandomSource, Strategy};
///
/// let config = Config::new(100, 10_000).random_source(RandomSource::fast());
///
/// let mut strategies: Vec<Box<dyn Strategy>> = vec![
///     Box::new(FullJitter::new(config.clone()).unwrap()),
///     Box::new(Exponential::new(config).unwrap()),
/// ];
///
/// for strategy in &mut strategies {
///     let delay = strategy.next(3);
///     assert!((0..=10_000).contains(&delay));
/// }
/// ```
pub trait Strategy {
    /// Returns the delay before the given retry attempt, in the unit of the
    /// configured `base` and `cap`.
    ///
    /// Never fails and never blocks. The result is never negative and, for
    /// configurations with `base <= cap`, never exceeds the cap
    /// ([`DecorrelatedJitter`] falls back to a constant `base` when the cap
    /// sits below it). A non-positive backoff window (for example from a
    /// negative `attempt`) yields `0`.
    #[must_use]
    fn next(&mut self, attempt: i32) -> i64;
}
