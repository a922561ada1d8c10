//! Tracing initialization.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// prompts and results. `verbosity` counts `-v` flags on top of the `warn`
/// default; `RUST_LOG` directives are honoured as well.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}
