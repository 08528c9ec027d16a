//! Timed intro sequence shown before the showcase.
//!
//! A short run of captions, a fade, then done — the showcase holds until
//! the sequence completes. Like the rest of the crate this schedules
//! nothing: the phase is a pure function of elapsed time.

use web_time::{Duration, Instant};

/// Phase of the intro at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Caption `index` is on screen.
    Caption(usize),
    /// Captions finished; fading out.
    FadingOut,
    /// Intro finished; the showcase may start.
    Done,
}

/// Sequenced captions with a fade-out tail.
#[derive(Debug, Clone)]
pub struct IntroSequence {
    captions: Vec<String>,
    started_at: Instant,
    caption_interval: Duration,
    fade_duration: Duration,
}

impl IntroSequence {
    /// Default on-screen time per caption.
    pub const CAPTION_INTERVAL: Duration = Duration::from_millis(1200);
    /// Default fade-out length after the last caption.
    pub const FADE_DURATION: Duration = Duration::from_millis(600);

    /// An intro starting at `now` with default timing.
    #[must_use]
    pub fn new(captions: Vec<String>, now: Instant) -> Self {
        Self::with_timing(
            captions,
            Self::CAPTION_INTERVAL,
            Self::FADE_DURATION,
            now,
        )
    }

    /// An intro with explicit per-caption and fade durations.
    #[must_use]
    pub fn with_timing(
        captions: Vec<String>,
        caption_interval: Duration,
        fade_duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            captions,
            started_at: now,
            caption_interval,
            fade_duration,
        }
    }

    /// The caption texts.
    #[must_use]
    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    /// Phase of the sequence at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> IntroPhase {
        if self.captions.is_empty() || self.caption_interval.is_zero() {
            return IntroPhase::Done;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let captions_end = self.caption_interval * self.captions.len() as u32;
        if elapsed < captions_end {
            let index = (elapsed.as_secs_f32()
                / self.caption_interval.as_secs_f32())
                as usize;
            return IntroPhase::Caption(index.min(self.captions.len() - 1));
        }
        if elapsed < captions_end + self.fade_duration {
            return IntroPhase::FadingOut;
        }
        IntroPhase::Done
    }

    /// Whether the sequence has completed at `now`.
    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        self.phase(now) == IntroPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro(now: Instant) -> IntroSequence {
        IntroSequence::new(
            vec![
                String::from("CoffeeOn doesn't vend."),
                String::from("It's your smart barista"),
            ],
            now,
        )
    }

    #[test]
    fn phases_advance_on_schedule() {
        let t0 = Instant::now();
        let seq = intro(t0);

        assert_eq!(seq.phase(t0), IntroPhase::Caption(0));
        assert_eq!(
            seq.phase(t0 + Duration::from_millis(1300)),
            IntroPhase::Caption(1)
        );
        assert_eq!(
            seq.phase(t0 + Duration::from_millis(2500)),
            IntroPhase::FadingOut
        );
        assert_eq!(
            seq.phase(t0 + Duration::from_millis(3100)),
            IntroPhase::Done
        );
    }

    #[test]
    fn done_is_sticky() {
        let t0 = Instant::now();
        let seq = intro(t0);
        assert!(!seq.is_done(t0 + Duration::from_secs(2)));
        assert!(seq.is_done(t0 + Duration::from_secs(3)));
        assert!(seq.is_done(t0 + Duration::from_secs(300)));
    }

    #[test]
    fn empty_captions_finish_immediately() {
        let t0 = Instant::now();
        let seq = IntroSequence::new(Vec::new(), t0);
        assert_eq!(seq.phase(t0), IntroPhase::Done);
    }
}
