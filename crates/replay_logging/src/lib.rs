#![deny(missing_docs)]
//! Shared logging utilities for the replay workspace.
//!
//! This crate provides the `replay_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is tagged
//! with the playback epoch that is live on the current thread, so log output
//! from two runs on the same page can be told apart.

use std::cell::Cell;

#[doc(hidden)]
pub use log;

thread_local! {
    /// Thread-local storage for the live playback epoch.
    static PLAYBACK_EPOCH: Cell<u64> = const { Cell::new(0) };
}

/// Sets the playback epoch for the current thread.
/// The runtime calls this whenever a new playback run starts or the page unloads.
pub fn set_playback_epoch(epoch: u64) {
    PLAYBACK_EPOCH.with(|v| v.set(epoch));
}

/// Retrieves the playback epoch for the current thread.
/// Returns 0 if no playback has started on this thread.
pub fn playback_epoch() -> u64 {
    PLAYBACK_EPOCH.with(|v| v.get())
}

/// Logs a trace-level message tagged with the playback epoch.
#[macro_export]
macro_rules! replay_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!("[epoch {}] {}", $crate::playback_epoch(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the playback epoch.
#[macro_export]
macro_rules! replay_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!("[epoch {}] {}", $crate::playback_epoch(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the playback epoch.
#[macro_export]
macro_rules! replay_info {
    ($($arg:tt)*) => {{
        $crate::log::info!("[epoch {}] {}", $crate::playback_epoch(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the playback epoch.
#[macro_export]
macro_rules! replay_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!("[epoch {}] {}", $crate::playback_epoch(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the playback epoch.
#[macro_export]
macro_rules! replay_error {
    ($($arg:tt)*) => {{
        $crate::log::error!("[epoch {}] {}", $crate::playback_epoch(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
