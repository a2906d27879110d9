// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://media.githubusercontent.com/media/holdoff-rs/holdoff/refs/heads/main/crates/holdoff/logo.png")]
#![doc(html_favicon_url = "https://media.githubusercontent.com/media/holdoff-rs/holdoff/refs/heads/main/crates/holdoff/favicon.ico")]

//! Retry backoff delay computation with full, equal, and decorrelated jitter.
//!
//! # Why
//!
//! When many clients retry a failing service on the same exponential
//! schedule, their retries arrive in synchronized waves that keep the
//! service down. Jitter spreads those retries out. This crate computes the
//! delays and nothing else: no sleeping, no timers, no retry loop. You
//! pick a strategy, feed it attempt numbers, and wait however your
//! application waits.
//!
//! Delays are plain `i64` values in whatever unit you assign to the
//! configured `base` and `cap` (milliseconds, ticks, microseconds); the
//! crate never interprets them.
//!
//! # Core Types
//!
//! - [`Config`]: the shared `(base, cap, random source)` configuration.
//! - [`Strategy`]: the one-method trait every strategy implements.
//! - [`FullJitter`], [`EqualJitter`], [`Exponential`],
//!   [`DecorrelatedJitter`]: the strategies, compared side by side in the
//!   [`Strategy`] docs.
//! - [`RandomSource`]: injected randomness, so tests can be deterministic.
//! - [`exp_cap`]: the overflow-safe `min(base * 2^attempt, cap)` primitive
//!   underneath it all.
//!
//! # Examples
//!
//! ## A Retry Loop
//!
//! ```rust
//! use holdoff::{Config, FullJitter, RandomSource, Strategy};
//!
//! let config = Config::new(100, 10_000).random_source(RandomSource::fast());
//! let mut backoff = FullJitter::new(config).unwrap();
//!
//! for attempt in 0..4 {
//!     let delay = backoff.next(attempt);
//!     assert!((0..10_000).contains(&delay));
//!     // sleep for `delay` of your time units, then try again
//! }
//! ```
//!
//! ## Deterministic Testing
//!
//! Inject a fixed function instead of real randomness and the delays
//! become exact:
//!
//! ```rust
//! use holdoff::{Config, DecorrelatedJitter, RandomSource, Strategy};
//!
//! let source = RandomSource::from_fn(|bound| bound / 2);
//! let config = Config::new(100, 10_000).random_source(source);
//! let mut backoff = DecorrelatedJitter::new(config).unwrap();
//!
//! assert_eq!(backoff.next(1), 200);
//! ```
//!
//! # Features
//!
//! - `logs`: emits a `tracing` event named `holdoff.delay` for every
//!   computed delay, carrying the strategy name, the attempt, and the
//!   delay.

mod backoff;
mod config;
mod error;
mod random;
mod strategy;
mod telemetry;

pub use backoff::exp_cap;
pub use config::Config;
pub use error::{Error, Result, Violation};
pub use random::RandomSource;
pub use strategy::{DecorrelatedJitter, EqualJitter, Exponential, FullJitter, Strategy};
