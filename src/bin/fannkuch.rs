// Copyright (C) 2020 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

use std::io::{self, Write};

use tracing::info;

const N: usize = 9;

fn main() -> io::Result<()> {
    let level = numbench::cli::parse_args("fannkuch", "Fannkuch-redux permutation flip counter");
    numbench::cli::init_tracing(level);

    info!("Counting flips over all permutations of {} elements", N);
    let result = numbench::fannkuch(N);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    numbench::write_fannkuch_report(&mut out, N, &result)?;
    out.flush()
}
