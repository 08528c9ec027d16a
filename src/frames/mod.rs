//! Flip-book frame sequences: addressing, background loading, playback.
//!
//! A sequence is a directory of contiguous, 1-based, zero-padded image
//! files. The [`FrameLoader`] decodes them off the render thread into a
//! [`FrameStore`]; the [`FramePlayer`] plays whatever has arrived, skipping
//! indices that are still pending or failed to decode.

mod loader;
mod player;
mod sequence;

pub use loader::FrameLoader;
pub use player::{fit_rect, DrawSurface, FitRect, FramePlayer, TickOutcome};
pub use sequence::{FrameImage, FrameSlot, FrameSource, FrameStore};
