//! Centralized showcase configuration with TOML preset support.
//!
//! All tweakable settings (playback rate, autoplay/cooldown timing, stage
//! geometry, parallax strength, content API) are consolidated here. Options
//! serialize to/from TOML; every sub-struct uses `#[serde(default)]` so a
//! partial file (e.g. only overriding `[carousel]`) works correctly.

mod carousel;
mod content;
mod parallax;
mod playback;
mod stage;

pub use carousel::CarouselOptions;
pub use content::ContentOptions;
pub use parallax::{CameraRigOptions, ParallaxOptions};
pub use playback::PlaybackOptions;
pub use stage::StageOptions;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CremaError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Frame-sequence playback settings.
    pub playback: PlaybackOptions,
    /// Autoplay and manual-control timing.
    pub carousel: CarouselOptions,
    /// Stage geometry: slot positions, scales, ring accent.
    pub stage: StageOptions,
    /// Pointer-parallax strength and camera rig.
    pub parallax: ParallaxOptions,
    /// Blog content API settings.
    pub content: ContentOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CremaError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| {
            CremaError::OptionsParse(format!(
                "failed to parse {}: {e}",
                path.display()
            ))
        })
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CremaError> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| CremaError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_showcase() {
        let opts = Options::default();
        assert_eq!(opts.playback.frame_count, 300);
        assert_eq!(opts.playback.fps, 60);
        assert_eq!(opts.carousel.autoplay_period_ms, 2000);
        assert_eq!(opts.carousel.click_cooldown_ms, 5000);
        assert_eq!(opts.carousel.key_cooldown_ms, 3000);
        assert!((opts.parallax.active_multiplier - 0.3).abs() < 1e-6);
        assert!((opts.parallax.neighbor_multiplier - 0.1).abs() < 1e-6);
        assert!((opts.stage.active_scale - 1.8).abs() < 1e-6);
    }

    #[test]
    fn partial_toml_overrides_only_named_sections() {
        let parsed: Result<Options, _> =
            toml::from_str("[carousel]\nautoplay_period_ms = 4000\n");
        let Ok(opts) = parsed else {
            unreachable!("partial options must parse");
        };
        assert_eq!(opts.carousel.autoplay_period_ms, 4000);
        // Untouched sections keep their defaults.
        assert_eq!(opts.carousel.click_cooldown_ms, 5000);
        assert_eq!(opts.playback.frame_count, 300);
    }

    #[test]
    fn options_toml_round_trip() {
        let mut opts = Options::default();
        opts.playback.fps = 30;
        opts.stage.active_scale = 2.0;
        let Ok(text) = toml::to_string_pretty(&opts) else {
            unreachable!("options must serialize");
        };
        let Ok(back) = toml::from_str::<Options>(&text) else {
            unreachable!("serialized options must parse");
        };
        assert_eq!(back, opts);
    }
}
