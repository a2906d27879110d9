// Copyright (c) The Holdoff Project Authors.
// Licensed under the MIT License.

//! Reproducible delay sequences with an injected random source.

use holdoff::{Config, DecorrelatedJitter, EqualJitter, RandomSource, Strategy};

fn main() -> Result<(), holdoff::Error> {
    // Midpoint draws make every run identical.
    let source = RandomSource::from_fn(|bound| bound / 2);
    let config = Config::new(100, 10_000).random_source(source);

    let mut equal = EqualJitter::new(config.clone())?;
    let delays: Vec<_> = (0..8).map(|attempt| equal.next(attempt)).collect();
    println!("equal jitter:        {delays:?}");

    let mut decorrelated = DecorrelatedJitter::new(config)?;
    let delays: Vec<_> = (0..8).map(|_| decorrelated.next(1)).collect();
    println!("decorrelated jitter: {delays:?}");

    Ok(())
}
