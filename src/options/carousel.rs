//! Autoplay and manual-control timing.

use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Timing for the circular model carousel.
///
/// Clicking an item suppresses autoplay for a longer window than keyboard
/// navigation does; both windows restart on repeated input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CarouselOptions {
    /// Autoplay advancement period in milliseconds (0 disables autoplay).
    pub autoplay_period_ms: u64,
    /// Manual-control window after a click selection, in milliseconds.
    pub click_cooldown_ms: u64,
    /// Manual-control window after keyboard navigation, in milliseconds.
    pub key_cooldown_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            autoplay_period_ms: 2000,
            click_cooldown_ms: 5000,
            key_cooldown_ms: 3000,
        }
    }
}

impl CarouselOptions {
    /// Autoplay advancement period.
    #[must_use]
    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.autoplay_period_ms)
    }

    /// Manual-control window after a click selection.
    #[must_use]
    pub fn click_cooldown(&self) -> Duration {
        Duration::from_millis(self.click_cooldown_ms)
    }

    /// Manual-control window after keyboard navigation.
    #[must_use]
    pub fn key_cooldown(&self) -> Duration {
        Duration::from_millis(self.key_cooldown_ms)
    }
}
