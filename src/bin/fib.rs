// Copyright (C) 2020 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use std::io::{self, Write};

use tracing::info;

const N: u64 = 35;

fn main() -> io::Result<()> {
    let level = numbench::cli::parse_args("fib", "Naive recursive Fibonacci");
    numbench::cli::init_tracing(level);

    info!("Computing fib({})", N);
    let result = numbench::timed(|| numbench::fib(N));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    numbench::write_fib_report(&mut out, &result)?;
    out.flush()
}
