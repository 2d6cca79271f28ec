use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The env variable that overrides the log filter.
pub const LOG_ENV_VAR: &str = "NICE_MOVE_LOG";

fn level_for(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Initializes the global tracing subscriber.
///
/// The filter comes from `NICE_MOVE_LOG` when set, otherwise from the number of `-v` flags.
/// Logs go to stderr so that generated configs can be piped from stdout.
pub fn init_logging(verbosity: u8) {
	let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
		.unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact();

	// A subscriber may already be set (for example in tests)
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt_layer)
		.try_init();
}
