use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Maps the number of `-v` flags to a log level.
///
/// # Example
/// ```
/// use intcalc::logging::level_for_verbosity;
/// use tracing::Level;
///
/// assert_eq!(level_for_verbosity(0), Level::WARN);
/// assert_eq!(level_for_verbosity(2), Level::DEBUG);
/// assert_eq!(level_for_verbosity(9), Level::TRACE);
/// ```
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr subscriber for the whole process.
///
/// `RUST_LOG` takes precedence; otherwise crate events are shown from `level`
/// up and everything else from `warn` up. Stdout is left to results.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(level: Level) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("intcalc={level},warn")));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr)
                                .with_target(true)
                                .without_time();

    // A second initialization only fails because a subscriber already exists.
    let _ = Registry::default().with(env_filter)
                               .with(fmt_layer)
                               .try_init();
}
