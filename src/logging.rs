use tracing_subscriber::EnvFilter;

/// Initialise logging. Defaults to `info`; `debug` lifts the level and lets
/// `RUST_LOG` override it. With `debug` off the level is forced so a stray
/// environment variable cannot make release builds verbose.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
