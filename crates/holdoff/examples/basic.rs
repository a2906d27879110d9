// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

//! Basic retry loop driven by full jitter backoff.

use std::thread;
use std::time::Duration;

use holdoff::{Config, FullJitter, RandomSource, Strategy};

fn main() -> Result<(), holdoff::Error> {
    let config = Config::new(25, 1_000).random_source(RandomSource::fast());
    let mut backoff = FullJitter::new(config)?;

    for attempt in 1..=5 {
        if execute_operation() {
            println!("attempt {attempt} succeeded");
            return Ok(());
        }

        let delay = backoff.next(attempt);
        println!("attempt {attempt} failed, waiting {delay}ms");
        thread::sleep(Duration::from_millis(u64::try_from(delay).unwrap_or(0)));
    }

    println!("giving up");
    Ok(())
}

// 60% chance of failing with a transient error
fn execute_operation() -> bool {
    fastrand::i16(0..10) > 5
}
