//! Replay engine: executes core effects on a single-threaded tokio loop.
mod config;
mod delay;
mod runtime;
mod surface;

pub use config::{ConfigError, PageConfig};
pub use delay::{DelayPicker, InstantDelay, LowerBoundDelay, RandomDelay};
pub use runtime::{PageHandle, PageOutcome, PageRuntime};
pub use surface::PageSurface;
