//! Discrete operations the showcase engine executes.

/// A single operation against the showcase state.
///
/// Commands come from the input processor (keyboard, pointer) or from the
/// rendering collaborator's picking callbacks; the engine is the only
/// thing that applies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowcaseCommand {
    /// Focus the given item (click selection).
    SelectItem(usize),
    /// Focus the next item (keyboard).
    StepNext,
    /// Focus the previous item (keyboard).
    StepPrev,
    /// The rendering collaborator reports pointer-over state for the
    /// focal item's geometry.
    SetHovered(bool),
    /// Raw pointer position in viewport pixels.
    PointerMoved {
        /// Horizontal position.
        x: f32,
        /// Vertical position.
        y: f32,
    },
}
