//! Flip-book playback onto an abstract 2D surface.

use web_time::{Duration, Instant};

use super::sequence::{FrameImage, FrameStore};
use crate::options::PlaybackOptions;

/// Minimal 2D drawing surface the player renders into.
///
/// The viewer backs this with a softbuffer window; tests use a recording
/// mock. Resizing is the surface owner's concern — the player re-reads
/// [`size`](Self::size) every tick, so new dimensions take effect on the
/// next draw with no stretched leftovers.
pub trait DrawSurface {
    /// Current surface dimensions in pixels.
    fn size(&self) -> (u32, u32);
    /// Clear the whole surface.
    fn clear(&mut self);
    /// Draw `image` scaled into the given rectangle.
    fn draw_image(&mut self, image: &FrameImage, rect: FitRect);
}

/// Placement of a scaled frame on a surface: top-left corner plus the
/// drawn size, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Drawn width.
    pub width: f32,
    /// Drawn height.
    pub height: f32,
}

/// Largest centered rectangle that fits `surface_size` while preserving
/// the image's aspect ratio (uniform scale-to-fit).
#[must_use]
pub fn fit_rect(image_size: (u32, u32), surface_size: (u32, u32)) -> FitRect {
    let (iw, ih) = (image_size.0 as f32, image_size.1 as f32);
    let (sw, sh) = (surface_size.0 as f32, surface_size.1 as f32);
    if iw <= 0.0 || ih <= 0.0 {
        return FitRect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
    }
    let scale = (sw / iw).min(sh / ih);
    let width = iw * scale;
    let height = ih * scale;
    FitRect {
        x: sw / 2.0 - width / 2.0,
        y: sh / 2.0 - height / 2.0,
        width,
        height,
    }
}

/// What a [`FramePlayer::tick`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Waiting on the first frame, or the rate gate has not elapsed;
    /// nothing was drawn and the frame cursor did not move.
    Idle,
    /// The surface was cleared and the frame cursor advanced.
    Advanced {
        /// Whether an image was actually drawn (`false` means the current
        /// slot was pending or failed and was skipped).
        drew: bool,
    },
}

/// Plays a numbered frame sequence as a looping flip-book.
///
/// The player is driven by the embedder's redraw callback: call
/// [`tick`](Self::tick) once per display refresh with the current time.
/// Draws are throttled to the configured rate; the frame cursor advances
/// by exactly one (mod sequence length) per successful tick and never
/// moves otherwise.
#[derive(Debug, Clone)]
pub struct FramePlayer {
    current: usize,
    frame_interval: Duration,
    last_render: Option<Instant>,
    started: bool,
}

impl FramePlayer {
    /// A player throttled to one draw per `frame_interval`
    /// (`Duration::ZERO` draws on every tick).
    #[must_use]
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            current: 0,
            frame_interval,
            last_render: None,
            started: false,
        }
    }

    /// Build a player from playback options.
    #[must_use]
    pub fn from_options(opts: &PlaybackOptions) -> Self {
        Self::new(opts.frame_interval())
    }

    /// Zero-based index of the frame the next tick will draw.
    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current
    }

    /// Whether the first-frame gate has opened and playback is running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Rewind to the first frame and forget the last draw time.
    pub fn reset(&mut self) {
        self.current = 0;
        self.last_render = None;
    }

    /// Advance playback by one display tick.
    ///
    /// Playback holds until the sequence's first slot has settled (loaded
    /// or failed). Once running, a tick inside the throttle window is a
    /// no-op; otherwise the surface is cleared, the current frame (when
    /// ready) is drawn scale-to-fit centered, and the cursor advances.
    /// Pending or failed frames are skipped silently — the clear and the
    /// advance still happen.
    pub fn tick(
        &mut self,
        now: Instant,
        store: &FrameStore,
        surface: &mut dyn DrawSurface,
    ) -> TickOutcome {
        if store.is_empty() {
            return TickOutcome::Idle;
        }
        if !self.started {
            if !store.first_settled() {
                return TickOutcome::Idle;
            }
            self.started = true;
        }
        if let Some(last) = self.last_render {
            if now.saturating_duration_since(last) < self.frame_interval {
                return TickOutcome::Idle;
            }
        }
        self.last_render = Some(now);

        surface.clear();
        let drew = match store.image(self.current) {
            Some(image) => {
                let rect = fit_rect(image.size(), surface.size());
                surface.draw_image(image, rect);
                true
            }
            None => false,
        };
        self.current = (self.current + 1) % store.len();
        TickOutcome::Advanced { drew }
    }
}
