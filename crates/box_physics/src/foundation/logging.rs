//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Hosts call this once at startup; the library itself only emits through the
/// `log` facade and never installs a logger on its own. `RUST_LOG` overrides
/// the default `info` level.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
