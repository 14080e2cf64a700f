//! Logging utilities and structured logging support

use std::backtrace::Backtrace;

pub use log::{debug, info, warn, error, trace};

/// Default `env_logger` filter when neither `RUST_LOG` nor a config sets one
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logging system
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initialize the logging system, falling back to `filter` when `RUST_LOG`
/// is not set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_filter(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).is_test(cfg!(test)).try_init();
}

/// Log a warning followed by the caller's backtrace.
///
/// The backtrace is only captured when `RUST_BACKTRACE` enables it.
pub fn warn_with_trace(message: &str) {
    warn!("{}", with_trace(message));
}

/// Log an error followed by the caller's backtrace.
pub fn error_with_trace(message: &str) {
    error!("{}", with_trace(message));
}

fn with_trace(message: &str) -> String {
    format!("{message}\n{}", Backtrace::capture())
}
