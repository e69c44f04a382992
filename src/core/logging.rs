//! Diagnostic logging setup for the CLI

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a stderr subscriber when diagnostics were asked for.
///
/// `--verbose` enables debug output for this crate; otherwise a subscriber is
/// installed only if `RUST_LOG` is set, so a normal run writes nothing to stderr.
pub fn init(verbose: bool, ansi: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("anchorfix=debug"),
        Err(_) => return,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
