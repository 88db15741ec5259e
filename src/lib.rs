// Copyright (C) 2020 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Two numeric micro-benchmarks: fannkuch-redux and naive recursive Fibonacci.

pub mod cli;
mod fannkuch;
mod fib;

pub use fannkuch::{count_flips, fannkuch, Fannkuch, Permutations};
pub use fannkuch::write_report as write_fannkuch_report;
pub use fib::{fib, timed, Timed};
pub use fib::write_report as write_fib_report;
