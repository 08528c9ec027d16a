//! Eased placement transitions for carousel items.

mod transition;

pub use transition::SlotAnimator;
