//! Logger setup for the `roster` binary.
//!
//! The library only talks to the `log` facade. The binary installs an
//! `env_logger` backend once at startup:
//!
//! ```no_run
//! roster::logging::init("info");
//! log::info!("ready");
//! ```
//!
//! `RUST_LOG` always wins over the configured default level.

use env_logger::{Builder, Env};

/// Installs the stderr logger, defaulting to `default_level` when `RUST_LOG`
/// is unset. Calling it again keeps the existing logger.
pub fn init(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    if Builder::from_env(env)
        .format_timestamp_millis()
        .format_target(true)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialised");
    }
}
