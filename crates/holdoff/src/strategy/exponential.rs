// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

use crate::backoff::exp_cap;
use crate::config::Config;
use crate::error::Result;
use crate::strategy::Strategy;
use crate::telemetry;

/// Plain exponential backoff without jitter: exactly
/// `min(base * 2^attempt, cap)`.
///
/// Fully deterministic. A random source in the configuration is neither
/// required nor consulted, which makes this the one strategy that builds
/// from a bare `Config::new(base, cap)`. Prefer a jitter strategy whenever
/// many clients might retry in lockstep.
///
/// # Examples
///
/// ```
/// use holdoff::{Config, Exponential, Strategy};
///
/// let mut strategy = Exponential::new(Config::new(100, 10_000)).unwrap();
///
/// assert_eq!(strategy.next(0), 100);
/// assert_eq!(strategy.next(3), 800);
/// assert_eq!(strategy.next(12), 10_000);
/// ```
#[derive(Debug, Clone)]
pub struct Exponential {
    base: i64,
    cap: i64,
}

impl Exponential {
    /// Creates the strategy from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming every violated precondition when
    /// `base <= 0` or `cap <= 0`. A missing random source is not an error
    /// for this strategy.
    pub fn new(config: Config) -> Result<Self> {
        let (base, cap) = config.require_bounds()?;
        Ok(Self { base, cap })
    }
}

impl Strategy for Exponential {
    fn next(&mut self, attempt: i32) -> i64 {
        let delay = exp_cap(self.base, self.cap, attempt);
        telemetry::delay_computed("exponential", attempt, delay);
        delay
    }
}
