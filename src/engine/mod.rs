//! Showcase engine: the single owner of carousel, parallax and placement
//! state.
//!
//! The engine holds everything mutable — the active-item controller, the
//! pointer tracker, the camera rig and the per-item slot animator — and
//! exposes mutation only through [`execute`](ShowcaseEngine::execute) and
//! the collaborator callbacks. Each display tick,
//! [`update`](ShowcaseEngine::update) produces a [`SceneFrame`] for the
//! embedding renderer; the engine never draws anything itself.

mod command;

pub use command::ShowcaseCommand;

use glam::Vec3;
use web_time::Instant;

use crate::animation::SlotAnimator;
use crate::carousel::{
    placement_for, role_for, CarouselController, DisplayRole, Placement,
};
use crate::easing::EasingFunction;
use crate::options::Options;
use crate::parallax::{item_offset, ring_offset, CameraRig, PointerTracker};

/// Identity record for one showcased model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseItem {
    /// Stable identity, unique within the collection.
    pub id: u32,
    /// Resource path of the model asset; resolved and loaded by the
    /// rendering collaborator, never read by the engine.
    pub asset: String,
}

/// Camera pose for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    /// Eye position.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
}

/// Floor ring accent under the active item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingAccent {
    /// Center of the ring.
    pub center: Vec3,
    /// Ring radius.
    pub radius: f32,
}

/// One item's renderable state for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    /// Identity of the item ([`ShowcaseItem::id`]).
    pub id: u32,
    /// Display role this tick.
    pub role: DisplayRole,
    /// Scene-space position, parallax included.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

/// Everything the rendering collaborator needs to draw one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneFrame {
    /// Per-item placements, in item order.
    pub placements: Vec<ItemPlacement>,
    /// Camera pose from the parallax rig.
    pub camera: CameraPose,
    /// Floor ring accent.
    pub ring: RingAccent,
}

/// Owns and arbitrates all showcase state.
///
/// Created when the showcase view mounts and dropped when it unmounts;
/// nothing inside schedules timers or callbacks, so dropping the engine is
/// the whole teardown story.
#[derive(Debug, Clone)]
pub struct ShowcaseEngine {
    items: Vec<ShowcaseItem>,
    controller: CarouselController,
    pointer: PointerTracker,
    rig: CameraRig,
    slots: SlotAnimator,
    options: Options,
    frame: SceneFrame,
}

impl ShowcaseEngine {
    /// An engine over `items`, focused on the first one.
    #[must_use]
    pub fn new(
        items: Vec<ShowcaseItem>,
        options: &Options,
        now: Instant,
    ) -> Self {
        let controller =
            CarouselController::new(items.len(), &options.carousel, now);
        let initial: Vec<Placement> = (0..items.len())
            .map(|index| {
                placement_for(role_for(index, 0, items.len()), &options.stage)
            })
            .collect();
        let slots = SlotAnimator::new(
            &initial,
            options.stage.transition(),
            EasingFunction::default(),
        );
        let frame = SceneFrame {
            placements: Vec::with_capacity(items.len()),
            ..SceneFrame::default()
        };
        Self {
            items,
            controller,
            pointer: PointerTracker::new(0.0, 0.0),
            rig: CameraRig::new(&options.parallax.camera),
            slots,
            options: options.clone(),
            frame,
        }
    }

    /// The showcased items, in carousel order.
    #[must_use]
    pub fn items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    /// Index of the focused item.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Whether the pointer hovers the focal item.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.controller.is_hovered()
    }

    /// Whether a manual-control cooldown is in effect at `now`.
    #[must_use]
    pub fn is_manual(&self, now: Instant) -> bool {
        self.controller.is_manual(now)
    }

    /// Record the viewport size pointer positions are normalized against.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.pointer.set_viewport(width, height);
    }

    /// Collaborator callback: pointer entered or left the focal item's
    /// geometry.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.controller.set_hovered(hovered);
    }

    /// Collaborator callback: the pointer activated item `index`.
    pub fn item_clicked(&mut self, index: usize, now: Instant) {
        self.execute(ShowcaseCommand::SelectItem(index), now);
    }

    /// Apply a discrete operation.
    pub fn execute(&mut self, command: ShowcaseCommand, now: Instant) {
        match command {
            ShowcaseCommand::SelectItem(index) => {
                self.controller.select(index, now);
                self.retarget_slots(now);
            }
            ShowcaseCommand::StepNext => {
                self.controller.step_next(now);
                self.retarget_slots(now);
            }
            ShowcaseCommand::StepPrev => {
                self.controller.step_prev(now);
                self.retarget_slots(now);
            }
            ShowcaseCommand::SetHovered(hovered) => {
                self.controller.set_hovered(hovered);
            }
            ShowcaseCommand::PointerMoved { x, y } => {
                self.pointer.update(x, y);
            }
        }
    }

    fn retarget_slots(&mut self, now: Instant) {
        let active = self.controller.active_index();
        let count = self.items.len();
        for index in 0..count {
            let role = role_for(index, active, count);
            self.slots.retarget(
                index,
                placement_for(role, &self.options.stage),
                now,
            );
        }
    }

    /// Advance autoplay/cooldown state and produce this tick's scene
    /// frame. The returned frame borrows the engine's reused buffer.
    pub fn update(&mut self, now: Instant) -> &SceneFrame {
        if self.controller.update(now) {
            self.retarget_slots(now);
        }
        self.slots.update(now);

        let pointer = self.pointer.position();
        self.rig.update(pointer, &self.options.parallax.camera);

        let active = self.controller.active_index();
        let count = self.items.len();
        self.frame.placements.clear();
        for (index, item) in self.items.iter().enumerate() {
            let role = role_for(index, active, count);
            let base = self.slots.placement(index).unwrap_or_else(|| {
                placement_for(role, &self.options.stage)
            });
            self.frame.placements.push(ItemPlacement {
                id: item.id,
                role,
                position: base.position
                    + item_offset(pointer, role, &self.options.parallax),
                scale: base.scale,
            });
        }
        self.frame.camera = CameraPose {
            eye: self.rig.position(),
            look_at: self.rig.look_at(),
        };
        self.frame.ring = RingAccent {
            center: Vec3::new(0.0, self.options.stage.ring_height, 0.0)
                + ring_offset(pointer, &self.options.parallax),
            radius: self.options.stage.ring_radius(),
        };
        &self.frame
    }

    /// The most recently computed scene frame.
    #[must_use]
    pub fn scene(&self) -> &SceneFrame {
        &self.frame
    }
}
