//! Circular item collection: input arbitration and stage layout.
//!
//! The [`CarouselController`] owns which item is focused and arbitrates
//! between autoplay, direct selection and hover; [`role_for`] /
//! [`placement_for`] map each item to its display slot.

mod controller;
mod layout;

pub use controller::CarouselController;
pub use layout::{placement_for, role_for, DisplayRole, Placement};
