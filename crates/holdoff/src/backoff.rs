// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

/// Computes the capped exponential backoff `min(base * 2^attempt, cap)`.
///
/// The value grows by repeated doubling and stops as soon as it reaches
/// `cap`, so the result never overflows no matter how large `attempt` is.
/// The result is always in `[0, cap]` and is non-decreasing in `attempt`
/// for a fixed `base` and `cap`.
///
/// Returns `0` when `base <= 0`, `cap <= 0`, or `attempt < 0`, signaling
/// that no valid backoff exists for the inputs. Callers that treat `0` as a
/// legitimate delay must check their inputs before reading the result that
/// way.
///
/// # Examples
///
/// ```
/// use holdoff::exp_cap;
///
/// assert_eq!(exp_cap(100, 10_000, 0), 100);
/// assert_eq!(exp_cap(100, 10_000, 3), 800);
/// assert_eq!(exp_cap(100, 10_000, 12), 10_000);
/// assert_eq!(exp_cap(100, 10_000, -1), 0);
/// ```
#[must_use]
pub fn exp_cap(base: i64, cap: i64, attempt: i32) -> i64 {
    if base <= 0 || cap <= 0 || attempt < 0 {
        return 0;
    }

    let mut delay = base;
    let mut remaining = attempt;
    while remaining > 0 && delay < cap {
        delay = delay.saturating_mul(2);
        remaining -= 1;
    }

    delay.min(cap)
}
