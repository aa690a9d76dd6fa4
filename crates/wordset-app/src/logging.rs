use std::io;

use tracing_subscriber::EnvFilter;
use wordset_config::log::LogConfig;

/// Install the global subscriber. Logs go to stderr, stdout carries data only.
pub fn init(config: &LogConfig, verbose: bool) {
    let directive = if verbose { "debug" } else { config.filter.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}
