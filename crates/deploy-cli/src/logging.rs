use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Console logging to stderr. `RUST_LOG` wins unless `--debug` is given.
pub fn init_logging(debug: bool) {
    let env_filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore a second initialization; only the first subscriber is kept.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
