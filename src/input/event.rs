//! Platform-agnostic input events.

/// A raw input event, fed into an
/// [`InputProcessor`](super::InputProcessor) which converts it into a
/// [`ShowcaseCommand`](crate::engine::ShowcaseCommand).
///
/// Consumers forward window events as these variants; clicks on item
/// geometry are not here because hit-testing belongs to the rendering
/// collaborator, which reports through the engine's callbacks instead.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute viewport position in physical pixels.
    CursorMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
    /// A key was pressed, identified by its physical-key debug name
    /// (`"ArrowLeft"`, `"ArrowRight"`).
    KeyPressed(String),
}
