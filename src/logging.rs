//! Tracing subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter; falls back to `RUST_LOG`
pub const ENV_UPLINK_LOG: &str = "UPLINK_LOG";

/// Install the global subscriber, writing to stderr so stdout stays clean for wire output.
///
/// Encode warnings are already printed by the commands, so the default level is
/// `error`; `verbose` raises it to `debug` when no filter is set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_env(ENV_UPLINK_LOG)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
