// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

use crate::backoff::exp_cap;
use crate::config::Config;
use crate::error::Result;
use crate::random::RandomSource;
use crate::strategy::Strategy;
use crate::telemetry;

/// The equal jitter strategy: half the backoff window guaranteed, the
/// other half randomized.
///
/// With `backoff = min(base * 2^attempt, cap)`, the delay is
/// `backoff/2 + U[0, backoff - backoff/2)`, so the result always lies in
/// `[backoff/2, backoff)`. Compared to [`FullJitter`][crate::FullJitter]
/// this keeps a floor under the delay, trading some desynchronization for
/// a guaranteed minimum wait.
///
/// Stateless: calls with the same attempt are independent draws.
///
/// # Examples
///
/// ```
/// use holdoff::{Config, EqualJitter, RandomSource, Strategy};
///
/// let config = Config::new(100, 10_000).random_source(RandomSource::from_fn(|bound| bound - 1));
/// let mut strategy = EqualJitter::new(config).unwrap();
///
/// // backoff = 800, guaranteed half = 400, randomized half = [0, 400)
/// assert_eq!(strategy.next(3), 799);
/// ```
#[derive(Debug, Clone)]
pub struct EqualJitter {
    base: i64,
    cap: i64,
    random: RandomSource,
}

impl EqualJitter {
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

impl Strategy for EqualJitter {
    fn next(&mut self, attempt: i32) -> i64 {
        let backoff = exp_cap(self.base, self.cap, attempt);

        let delay = if backoff <= 0 {
            0
        } else {
            // The randomized span is ceil(backoff / 2), positive whenever backoff is.
            let half = backoff / 2;
            half + self.random.sample(backoff - half)
        };

        telemetry::delay_computed("equal", attempt, delay);
        delay
    }
}
