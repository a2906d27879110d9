// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

use crate::backoff::exp_cap;
use crate::config::Config;
use crate::error::Result;
use crate::random::RandomSource;
use crate::strategy::Strategy;
use crate::telemetry;

/// The full jitter strategy: a delay drawn uniformly from
/// `[0, min(base * 2^attempt, cap))`.
///
/// Randomizing across the entire backoff window is the most effective of
/// the jitter family at breaking up synchronized retry storms, at the cost
/// of occasionally retrying much sooner than plain exponential backoff
/// would.
///
/// Stateless: calls with the same attempt are independent draws, and a
/// single instance (or clones of it) can serve any number of retry
/// sequences.
///
/// # Examples
///
/// ```
/// use holdoff::{Config, FullJitter, RandomSource, Strategy};
///
/// let config = Config::new(100, 10_000).random_source(RandomSource::from_fn(|bound| bound - 1));
/// let mut strategy = FullJitter::new(config).unwrap();
///
/// assert_eq!(strategy.next(3), 799);
/// ```
#[derive(Debug, Clone)]
pub struct FullJitter {
    base: i64,
    cap: i64,
    random: RandomSource,
}

impl FullJitter {
    /// Creates the strategy from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming every violated precondition when
    /// `base <= 0`, `cap <= 0`, or the configuration carries no random
    /// source.
    pub fn new(config: Config) -> Result<Self> {
        let (base, cap, random) = config.require_random()?;
        Ok(Self { base, cap, random })
    }
}

impl Strategy for FullJitter {
    fn next(&mut self, attempt: i32) -> i64 {
        let backoff = exp_cap(self.base, self.cap, attempt);

        // Random sources are undefined for a non-positive bound.
        let delay = if backoff <= 0 { 0 } else { self.random.sample(backoff) };

        telemetry::delay_computed("full", attempt, delay);
        delay
    }
}
