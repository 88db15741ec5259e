// Copyright (C) 2020 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Naive recursive Fibonacci, used to measure raw function call overhead.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::debug;

/// Computes the `n`-th Fibonacci number by plain double recursion.
///
/// Runs in exponential time on purpose; do not memoize.
pub fn fib(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        n => fib(n - 1) + fib(n - 2),
    }
}

/// A value together with the wall-clock time it took to compute.
#[derive(Clone, Copy, Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `f` once, measuring it with a monotonic clock.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    debug!("Finished after {:?}", elapsed);
    Timed { value, elapsed }
}

/// Writes the two result lines printed by the `fib` program.
pub fn write_report<W: Write>(out: &mut W, result: &Timed<u64>) -> io::Result<()> {
    writeln!(out, "{}", result.value)?;
    writeln!(out, "elapsed: {}", result.secs())
}
