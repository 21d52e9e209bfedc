use tracing_subscriber::filter::EnvFilter;

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Install the global tracing subscriber. Log lines go to stderr so they
/// never interleave with the menu protocol on stdout.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::new("warn").add_directive(
        format!("{}={}", BIN_NAME, max_level(verbosity))
            .parse()
            .expect("static directive"),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
