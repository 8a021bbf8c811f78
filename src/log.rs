// src/log.rs
//
// File logging for both binaries. Library code only emits events through the
// macros below; nothing is written until a binary calls `init`.

use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber writing to `.store/debug.log`.
/// `RUST_LOG` overrides the default `info` level. Calling twice is harmless.
pub fn init() {
    if GUARD.get().is_some() {
        return;
    }
    if std::fs::create_dir_all(STORE_DIR).is_err() {
        return;
    }

    let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        let _ = GUARD.set(guard);
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
