// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

/// Emits a named event for a computed delay when the `logs` feature is on.
#[cfg_attr(
    not(any(feature = "logs", test)),
    expect(unused_variables, reason = "unused when the logs feature is disabled")
)]
pub(crate) fn delay_computed(strategy: &'static str, attempt: i32, delay: i64) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "holdoff.delay",
        tracing::Level::DEBUG,
        strategy.name = strategy,
        backoff.attempt = attempt,
        backoff.delay = delay,
    );
}
