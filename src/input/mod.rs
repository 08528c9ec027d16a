//! Input handling: platform-agnostic events, key bindings, and the
//! processor that converts raw window events into showcase commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into showcase commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::{InputProcessor, KeyBindings};
