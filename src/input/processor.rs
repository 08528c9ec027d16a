//! Converts raw platform events into showcase commands.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::engine::ShowcaseCommand;

/// Maps physical key names to showcase commands.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"ArrowLeft"`, `"ArrowRight"`, `"KeyA"`, etc. Only discrete,
/// parameterless commands make sense as key bindings — pointer-driven
/// commands are produced from cursor events, not key lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-boundable subset of [`ShowcaseCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Focus the previous item.
    StepPrev,
    /// Focus the next item.
    StepNext,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`ShowcaseCommand`].
    fn to_command(self) -> ShowcaseCommand {
        match self {
            Self::StepPrev => ShowcaseCommand::StepPrev,
            Self::StepNext => ShowcaseCommand::StepNext,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowLeft".into(), KeyCommandTag::StepPrev),
            ("ArrowRight".into(), KeyCommandTag::StepNext),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ShowcaseCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }
}

/// Turns [`InputEvent`]s into [`ShowcaseCommand`]s.
///
/// Owns the keyboard binding map; cursor moves pass through as pointer
/// commands unconditionally.
#[derive(Debug, Clone)]
pub struct InputProcessor {
    key_bindings: KeyBindings,
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputProcessor {
    /// A processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_bindings: KeyBindings::default(),
        }
    }

    /// A processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self { key_bindings }
    }

    /// Convert one event. Unbound keys produce nothing.
    #[must_use]
    pub fn handle_event(
        &self,
        event: &InputEvent,
    ) -> Option<ShowcaseCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                Some(ShowcaseCommand::PointerMoved { x: *x, y: *y })
            }
            InputEvent::KeyPressed(key) => self.key_bindings.lookup(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_step_commands() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor
                .handle_event(&InputEvent::KeyPressed("ArrowLeft".into())),
            Some(ShowcaseCommand::StepPrev)
        );
        assert_eq!(
            processor
                .handle_event(&InputEvent::KeyPressed("ArrowRight".into())),
            Some(ShowcaseCommand::StepNext)
        );
    }

    #[test]
    fn unbound_keys_produce_nothing() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(&InputEvent::KeyPressed("KeyQ".into())),
            None
        );
    }

    #[test]
    fn cursor_moves_become_pointer_commands() {
        let processor = InputProcessor::new();
        assert_eq!(
            processor
                .handle_event(&InputEvent::CursorMoved { x: 12.0, y: 34.0 }),
            Some(ShowcaseCommand::PointerMoved { x: 12.0, y: 34.0 })
        );
    }

    #[test]
    fn bindings_round_trip_through_serde() {
        let bindings = KeyBindings::default();
        let Ok(json) = serde_json::to_string(&bindings) else {
            unreachable!("bindings must serialize");
        };
        let Ok(back) = serde_json::from_str::<KeyBindings>(&json) else {
            unreachable!("bindings must deserialize");
        };
        assert_eq!(back, bindings);
    }
}
