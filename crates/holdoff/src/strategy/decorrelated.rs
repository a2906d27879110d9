// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

use crate::config::Config;
use crate::error::Result;
use crate::random::RandomSource;
use crate::strategy::Strategy;
use crate::telemetry;

/// The decorrelated jitter strategy: each delay is drawn from
/// `[base, min(3 * previous, cap))`, where `previous` is the delay this
/// instance returned last.
///
/// Deriving the window from the previous delay instead of the attempt
/// number lets the sequence grow (or shrink) organically while staying
/// inside `[base, cap]` (a cap below the base collapses the window and the
/// delay degenerates to a constant `base`). The price is state: one
/// instance serves exactly one retry sequence, enforced by `next` taking
/// `&mut self`. Cloning forks the sequence at its current position.
///
/// # Resetting
///
/// A fresh instance starts with `previous = base`. Two things restore that
/// state:
///
/// - [`reset`][Self::reset], the explicit way;
/// - calling [`next`][Strategy::next] with `attempt < 1`, kept for
///   compatibility with attempt-driven callers.
///
/// The second form is easy to trigger by accident: a caller that counts
/// attempts from zero restarts the progression on every `next(0)`. Number
/// attempts from 1, or call [`reset`][Self::reset] when you mean reset.
///
/// # Examples
///
/// ```
/// use holdoff::{Config, DecorrelatedJitter, RandomSource, Strategy};
///
/// let config = Config::new(100, 10_000).random_source(RandomSource::from_fn(|bound| bound - 1));
/// let mut strategy = DecorrelatedJitter::new(config).unwrap();
///
/// // The window starts at [100, 300) and then follows the previous delay.
/// assert_eq!(strategy.next(1), 299);
/// assert_eq!(strategy.next(2), 896);
///
/// strategy.reset();
/// assert_eq!(strategy.next(1), 299);
/// ```
#[derive(Debug, Clone)]
pub struct DecorrelatedJitter {
    base: i64,
    cap: i64,
    random: RandomSource,
    sleep: i64,
}

impl DecorrelatedJitter {
    /// Creates the strategy from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error naming every violated precondition when
    /// `base <= 0`, `cap <= 0`, or the configuration carries no random
    /// source.
    pub fn new(config: Config) -> Result<Self> {
        let (base, cap, random) = config.require_random()?;
        Ok(Self {
            base,
            cap,
            random,
            sleep: base,
        })
    }

    /// Restores the fresh state, as if no delay had been produced yet.
    pub fn reset(&mut self) {
        self.sleep = self.base;
    }
}

impl Strategy for DecorrelatedJitter {
    fn next(&mut self, attempt: i32) -> i64 {
        if attempt < 1 {
            self.reset();
        }

        // A corrupted retained delay must not poison the sequence.
        if self.sleep <= 0 {
            self.sleep = self.base;
        }

        let lower = self.base;
        let mut upper = self.sleep.saturating_mul(3);
        if upper < self.base {
            upper = self.base;
        }

        if upper > self.cap {
            upper = self.cap;
        }

        let delay = if upper <= lower {
            // No room to jitter.
            lower
        } else {
            let candidate = lower.saturating_add(self.random.sample(upper - lower));
            if candidate <= 0 {
                lower
            } else if candidate > self.cap {
                self.cap
            } else {
                candidate
            }
        };

        self.sleep = delay;
        telemetry::delay_computed("decorrelated", attempt, delay);
        delay
    }
}
