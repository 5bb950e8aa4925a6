//! Diagnostics go to stderr as `[LEVEL] message`, leaving stdout to the
//! sort reports.

use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Maps the `-v` count to a level: none is WARN, `-v` INFO, `-vv` and up DEBUG.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

pub fn init(verbose: u8) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(level_for_verbosity(verbose));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
