//! Pointer-driven parallax: normalized tracking, per-item offsets, and the
//! eased camera rig.
//!
//! Raw pointer positions are normalized to `[-1, 1]²` with Y pointing up;
//! items shift by a role-dependent fraction of that vector so the focused
//! item appears closer than its neighbors. The camera rig follows the
//! pointer with per-tick smoothing — embedders that bring their own camera
//! easing can ignore it and read the tracker directly.

use glam::{Vec2, Vec3};

use crate::carousel::DisplayRole;
use crate::options::{CameraRigOptions, ParallaxOptions};

/// Normalize raw screen coordinates (origin top-left, Y down) against a
/// viewport into `[-1, 1]²` with Y up.
///
/// The viewport center maps to `(0, 0)`, the top-left corner to `(-1, 1)`
/// and the bottom-right corner to `(1, -1)`. Degenerate viewports map
/// everything to the origin.
#[must_use]
pub fn normalize(raw: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (raw.x / viewport.x) * 2.0 - 1.0,
        -((raw.y / viewport.y) * 2.0 - 1.0),
    )
}

/// Tracks the pointer as a normalized coordinate.
///
/// The render tick always reads the latest position; there is no history
/// and no smoothing here.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    viewport: Vec2,
    position: Vec2,
}

impl PointerTracker {
    /// A tracker for the given viewport, pointer at the center.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            position: Vec2::ZERO,
        }
    }

    /// Record a viewport resize. The stored normalized position is kept;
    /// the next pointer move re-normalizes against the new size.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Record a raw pointer position in viewport pixels.
    pub fn update(&mut self, x: f32, y: f32) {
        self.position = normalize(Vec2::new(x, y), self.viewport);
    }

    /// Latest normalized pointer position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Positional parallax offset for an item with the given role.
///
/// The active item uses the stronger multiplier; vertical travel is damped
/// and a fraction of the horizontal input leaks into depth, which is what
/// sells the depth illusion.
#[must_use]
pub fn item_offset(
    pointer: Vec2,
    role: DisplayRole,
    opts: &ParallaxOptions,
) -> Vec3 {
    let multiplier = if role == DisplayRole::Active {
        opts.active_multiplier
    } else {
        opts.neighbor_multiplier
    };
    Vec3::new(
        pointer.x * multiplier,
        pointer.y * multiplier * opts.vertical_damping,
        pointer.x * multiplier * opts.depth_factor,
    )
}

/// Offset for the floor ring accent, confined to the ground plane.
#[must_use]
pub fn ring_offset(pointer: Vec2, opts: &ParallaxOptions) -> Vec3 {
    Vec3::new(
        pointer.x * opts.ring_multiplier,
        0.0,
        pointer.y * opts.ring_multiplier,
    )
}

/// Camera pose that trails the pointer.
///
/// Each [`update`](Self::update) moves the eye a fixed fraction of the way
/// toward the pointer-driven target, assuming display-rate ticks; the
/// look-at point follows immediately.
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: Vec3,
    look_at: Vec3,
}

impl CameraRig {
    /// A rig at its rest pose.
    #[must_use]
    pub fn new(opts: &CameraRigOptions) -> Self {
        Self {
            position: Vec3::from_array(opts.base_position),
            look_at: Vec3::ZERO,
        }
    }

    /// One smoothing step toward the pointer-driven target pose.
    pub fn update(&mut self, pointer: Vec2, opts: &CameraRigOptions) {
        let base = Vec3::from_array(opts.base_position);
        let target = Vec3::new(
            base.x + pointer.x * opts.sway,
            base.y + pointer.y * opts.lift,
            base.z + pointer.x * opts.dolly,
        );
        self.position += (target - self.position) * opts.smoothing;
        self.look_at = Vec3::new(
            pointer.x * opts.look_sway,
            pointer.y * opts.look_lift,
            0.0,
        );
    }

    /// Current eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current look-at point.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }
}
