use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Progress messages shown, in order, while the page pretends to search.
pub const PROGRESS_MESSAGES: [&str; 5] = [
    "Searching for an answer...",
    "Scanning the internet...",
    "Analyzing data...",
    "Processing results...",
    "Match found!",
];

/// Half-open range `[min_ms, max_ms)` of milliseconds. Equal bounds mean a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const ZERO: Self = Self::fixed(0);

    pub const fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    pub const fn between(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub fn is_fixed(&self) -> bool {
        self.max_ms <= self.min_ms
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }
}

/// Delay ranges for each suspension point of a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// After each typed character, including the empty prefix.
    pub keystroke: DelayRange,
    /// Pause between the fully typed query and the first progress message.
    pub typing_settle: DelayRange,
    pub progress_message: DelayRange,
    pub success_hold: DelayRange,
}

impl PacingConfig {
    pub const STANDARD: Self = Self {
        keystroke: DelayRange::between(100, 200),
        typing_settle: DelayRange::fixed(500),
        progress_message: DelayRange::between(800, 1200),
        success_hold: DelayRange::fixed(1500),
    };

    /// Zero-duration pacing; phase and event order are unchanged.
    pub const fn instant() -> Self {
        Self {
            keystroke: DelayRange::ZERO,
            typing_settle: DelayRange::ZERO,
            progress_message: DelayRange::ZERO,
            success_hold: DelayRange::ZERO,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
