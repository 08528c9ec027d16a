//! Interactive product-showcase engine.
//!
//! `crema` powers a brand site's hero experience in native code: a
//! flip-book background played from a numbered frame sequence, and a
//! circular model carousel with autoplay, manual override, hover pause
//! and pointer-driven parallax. The crate owns timing and state; actual
//! 3D drawing stays with an embedding renderer, which consumes an
//! [`engine::SceneFrame`] every tick and reports hover/click hits back
//! through the engine's callbacks.
//!
//! # Key entry points
//!
//! - [`engine::ShowcaseEngine`] - carousel, parallax and placement state
//! - [`frames::FramePlayer`] - throttled flip-book playback
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`content::ContentClient`] - fail-soft blog feed client
//!   (feature `content`)
//! - [`Viewer`] - standalone window with software presentation
//!   (feature `viewer`)
//!
//! # Architecture
//!
//! Timing is explicit throughout: nothing schedules timers or callbacks.
//! Autoplay periods, manual-control cooldowns and transition clocks are
//! plain deadline data, advanced by passing `now` into `update` from the
//! host's redraw loop. That makes teardown trivial (drop the engine,
//! stop the frame loader) and lets tests drive every mechanism with a
//! fake clock through ordinary `Instant` arithmetic.

pub mod animation;
pub mod carousel;
pub mod content;
pub mod easing;
pub mod engine;
pub mod error;
pub mod frames;
pub mod input;
pub mod intro;
pub mod options;
pub mod parallax;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::{ShowcaseCommand, ShowcaseEngine, ShowcaseItem};
pub use error::CremaError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
