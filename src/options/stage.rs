//! Stage geometry: where each display role sits and how large it renders.

use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Positions and scales for the carousel's display roles, plus the floor
/// ring accent under the active item.
///
/// Positions are scene-space `[x, y, z]`; the hidden slot parks items well
/// below the visible stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StageOptions {
    /// Slot of the focused item.
    pub active_position: [f32; 3],
    /// Scale of the focused item.
    pub active_scale: f32,
    /// Slot of the left neighbor.
    pub left_position: [f32; 3],
    /// Slot of the right neighbor.
    pub right_position: [f32; 3],
    /// Scale of both neighbors.
    pub neighbor_scale: f32,
    /// Parking slot for items that are neither active nor neighbors.
    pub hidden_position: [f32; 3],
    /// Scale of parked items.
    pub hidden_scale: f32,
    /// Ring radius as a factor of the active scale.
    pub ring_radius_factor: f32,
    /// Height of the ring accent (just above the floor plane).
    pub ring_height: f32,
    /// Duration of a slot-to-slot transition, in milliseconds.
    pub transition_ms: u64,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            active_position: [0.0, 0.2, 0.0],
            active_scale: 1.8,
            left_position: [-4.0, 0.02, -1.0],
            right_position: [4.0, 0.02, -1.0],
            neighbor_scale: 1.3,
            hidden_position: [0.0, -100.0, 0.0],
            hidden_scale: 0.5,
            ring_radius_factor: 0.66,
            ring_height: -0.98,
            transition_ms: 450,
        }
    }
}

impl StageOptions {
    /// Duration of a slot-to-slot transition.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Radius of the floor ring accent.
    #[must_use]
    pub fn ring_radius(&self) -> f32 {
        self.ring_radius_factor * self.active_scale
    }
}
