// Copyright (C) 2020 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Argument parsing and tracer setup shared by the benchmark binaries.

use std::ffi::OsString;
use std::io;

use clap::{App, Arg};
use tracing::Level;
use tracing_subscriber::{fmt::time::ChronoLocal, FmtSubscriber};

/// Parses the process arguments and returns the requested log level.
pub fn parse_args(name: &str, about: &str) -> Level {
    parse_args_from(name, about, std::env::args_os())
}

/// Like [`parse_args`], but reads the arguments from `args`.
/// The first item is the program name.
pub fn parse_args_from<I, T>(name: &str, about: &str, args: I) -> Level
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = App::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Logs progress to stderr, repeat for more detail"),
        )
        .get_matches_from(args);
    level_for(matches.occurrences_of("verbose"))
}

fn level_for(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global tracer. Output goes to stderr, stdout is kept
/// for the benchmark results.
pub fn init_tracing(level: Level) {
    FmtSubscriber::builder()
        .with_timer(ChronoLocal::with_format("[%Mm %Ss]".to_string()))
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
