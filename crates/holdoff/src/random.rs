// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

use std::fmt::Debug;
use std::sync::Arc;

/// Source of the randomness consumed by the jitter strategies.
///
/// A source is a function from an exclusive upper bound `n > 0` to a value
/// uniformly distributed in `[0, n)`. Strategies never invoke a source with
/// a zero or negative bound, so implementations do not need to handle that
/// case.
///
/// The random numbers involved are **NOT cryptographically secure**; jitter
/// only needs to spread retries out, not to be unpredictable to an
/// adversary. Use [`RandomSource::fast`] (also the `Default`) in production
/// and [`RandomSource::from_fn`] to inject a deterministic function in
/// tests.
///
/// # Examples
///
/// ```
/// use holdoff::RandomSource;
///
/// let real = RandomSource::fast();
/// assert!((0..10).contains(&real.sample(10)));
///
/// let fixed = RandomSource::from_fn(|bound| bound - 1);
/// assert_eq!(fixed.sample(10), 9);
/// ```
#[derive(Clone, Default)]
pub struct RandomSource(Inner);

#[derive(Clone, Default)]
enum Inner {
    #[default]
    Fast,

    Custom(Arc<dyn Fn(i64) -> i64 + Send + Sync>),
}

impl RandomSource {
    /// Returns the thread-local `fastrand`-backed source.
    ///
    /// This is the source you want unless you need reproducibility.
    #[must_use]
    pub fn fast() -> Self {
        Self(Inner::Fast)
    }

    /// Wraps an arbitrary sampling function.
    ///
    /// The function receives an exclusive upper bound `n > 0` and must
    /// return a value in `[0, n)`. Uniformity is expected for production
    /// sources, but nothing checks it; tests routinely use degenerate
    /// functions such as `|bound| bound - 1`.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(i64) -> i64 + Send + Sync + 'static,
    {
        Self(Inner::Custom(Arc::new(f)))
    }

    /// Draws a value from `[0, bound)`.
    #[must_use]
    pub fn sample(&self, bound: i64) -> i64 {
        debug_assert!(bound > 0, "sample bound must be positive");
        match &self.0 {
            Inner::Fast => fastrand::i64(0..bound),
            Inner::Custom(generator) => generator(bound),
        }
    }
}

impl Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Inner::Fast => write!(f, "Fast"),
            Inner::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(RandomSource: Debug, Clone, Send, Sync);

    #[test]
    fn fast_respects_bound() {
        let source = RandomSource::fast();
        for _ in 0..200 {
            let v = source.sample(10);
            assert!((0..10).contains(&v));
        }
    }

    #[test]
    fn custom_receives_bound() {
        let source = RandomSource::from_fn(|bound| bound - 1);
        assert_eq!(source.sample(5), 4);
        assert_eq!(source.sample(1), 0);
    }

    #[test]
    fn clones_share_the_function() {
        let source = RandomSource::from_fn(|bound| bound / 2);
        let clone = source.clone();
        assert_eq!(source.sample(8), clone.sample(8));
    }

    #[test]
    fn default_is_fast() {
        assert_eq!(format!("{:?}", RandomSource::default()), "Fast");
    }

    #[test]
    fn debug_is_opaque() {
        assert_eq!(format!("{:?}", RandomSource::fast()), "Fast");
        assert_eq!(format!("{:?}", RandomSource::from_fn(|_| 0)), "Custom");
    }
}
