//! Pointer-parallax strength and camera rig settings.

use serde::{Deserialize, Serialize};

/// Per-item and accent parallax multipliers.
///
/// The active item shifts more than its neighbors, producing the depth
/// illusion; vertical and depth axes are damped relative to horizontal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallaxOptions {
    /// Positional multiplier for the active item.
    pub active_multiplier: f32,
    /// Positional multiplier for every other item.
    pub neighbor_multiplier: f32,
    /// Vertical damping applied on top of the item multiplier.
    pub vertical_damping: f32,
    /// Depth (z) factor applied on top of the item multiplier.
    pub depth_factor: f32,
    /// Multiplier for the floor ring accent.
    pub ring_multiplier: f32,
    /// Camera rig response.
    pub camera: CameraRigOptions,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            active_multiplier: 0.3,
            neighbor_multiplier: 0.1,
            vertical_damping: 0.5,
            depth_factor: 0.2,
            ring_multiplier: 0.05,
            camera: CameraRigOptions::default(),
        }
    }
}

/// How the camera follows the pointer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraRigOptions {
    /// Rest position of the camera eye.
    pub base_position: [f32; 3],
    /// Horizontal eye travel per unit of pointer x.
    pub sway: f32,
    /// Vertical eye travel per unit of pointer y.
    pub lift: f32,
    /// Depth eye travel per unit of pointer x.
    pub dolly: f32,
    /// Horizontal look-at travel per unit of pointer x.
    pub look_sway: f32,
    /// Vertical look-at travel per unit of pointer y.
    pub look_lift: f32,
    /// Per-tick smoothing factor toward the target pose, in (0, 1].
    pub smoothing: f32,
}

impl Default for CameraRigOptions {
    fn default() -> Self {
        Self {
            base_position: [0.0, 2.0, 6.0],
            sway: 2.0,
            lift: 1.0,
            dolly: 0.5,
            look_sway: 0.5,
            look_lift: 0.3,
            smoothing: 0.05,
        }
    }
}
