//! Active-item arbitration: autoplay vs manual control vs hover.
//!
//! Nothing here schedules timers. Deadlines are plain data and every
//! time-dependent operation takes `now` explicitly, so a stale timer
//! firing after supersession cannot exist and tests drive the controller
//! with a fake clock through ordinary `Instant` arithmetic.

use web_time::{Duration, Instant};

use crate::options::CarouselOptions;

/// Which input source currently owns item advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlMode {
    /// Autoplay may advance the active item.
    Auto,
    /// Autoplay is suppressed until the deadline passes. Re-entering
    /// overwrites the deadline: last writer wins, exactly one expiry.
    ManualCooldown { until: Instant },
}

/// Single source of truth for "which item is focused".
///
/// Three inputs compete for the active index:
///
/// - **autoplay** advances it on a fixed period, suppressed while the
///   pointer hovers the focal item or a manual cooldown is running;
/// - **direct selection** (click) focuses an item and starts the long
///   cooldown;
/// - **keyboard navigation** steps by one and starts the short cooldown.
///
/// The guards are level-triggered: an autoplay deadline that passes while
/// suppressed is consumed without effect and leaves no backlog.
#[derive(Debug, Clone)]
pub struct CarouselController {
    item_count: usize,
    active_index: usize,
    hovered: bool,
    mode: ControlMode,
    next_autoplay: Instant,
    autoplay_period: Duration,
    click_cooldown: Duration,
    key_cooldown: Duration,
}

impl CarouselController {
    /// A controller over `item_count` items, focused on index 0.
    ///
    /// Autoplay deadlines are aligned to `now` and stay aligned for the
    /// controller's lifetime. An `item_count` of 0 is treated as 1.
    #[must_use]
    pub fn new(
        item_count: usize,
        opts: &CarouselOptions,
        now: Instant,
    ) -> Self {
        let autoplay_period = opts.autoplay_period();
        Self {
            item_count: item_count.max(1),
            active_index: 0,
            hovered: false,
            mode: ControlMode::Auto,
            next_autoplay: now + autoplay_period,
            autoplay_period,
            click_cooldown: opts.click_cooldown(),
            key_cooldown: opts.key_cooldown(),
        }
    }

    /// Index of the focused item, always in `[0, item_count)`.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of items in the circle.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the pointer is over the focal item.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a manual-control cooldown is in effect at `now`.
    #[must_use]
    pub fn is_manual(&self, now: Instant) -> bool {
        matches!(self.mode, ControlMode::ManualCooldown { until } if now < until)
    }

    /// Direct selection (click). Focuses `index` (wrapped into range) and
    /// restarts the click cooldown.
    pub fn select(&mut self, index: usize, now: Instant) {
        self.active_index = index % self.item_count;
        self.enter_cooldown(now + self.click_cooldown);
    }

    /// Keyboard navigation: focus the next item and restart the key
    /// cooldown.
    pub fn step_next(&mut self, now: Instant) {
        self.active_index = (self.active_index + 1) % self.item_count;
        self.enter_cooldown(now + self.key_cooldown);
    }

    /// Keyboard navigation: focus the previous item and restart the key
    /// cooldown.
    pub fn step_prev(&mut self, now: Instant) {
        self.active_index =
            (self.active_index + self.item_count - 1) % self.item_count;
        self.enter_cooldown(now + self.key_cooldown);
    }

    /// Hover state, reported by the rendering collaborator's pointer
    /// intersection. The controller does no geometry testing itself.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    fn enter_cooldown(&mut self, until: Instant) {
        self.mode = ControlMode::ManualCooldown { until };
    }

    /// Advance time to `now`. Returns `true` if autoplay moved the focus.
    ///
    /// Every autoplay deadline between the last update and `now` is
    /// replayed in order with the cooldown state it would have seen, so
    /// coarse updates (a fake clock jumping seconds at a time) behave the
    /// same as per-display-tick updates.
    pub fn update(&mut self, now: Instant) -> bool {
        let mut advanced = false;
        if !self.autoplay_period.is_zero() {
            while now >= self.next_autoplay {
                let tick_at = self.next_autoplay;
                self.expire_cooldown(tick_at);
                if self.mode == ControlMode::Auto && !self.hovered {
                    self.active_index =
                        (self.active_index + 1) % self.item_count;
                    advanced = true;
                }
                self.next_autoplay = tick_at + self.autoplay_period;
            }
        }
        self.expire_cooldown(now);
        advanced
    }

    fn expire_cooldown(&mut self, now: Instant) {
        if let ControlMode::ManualCooldown { until } = self.mode {
            if now >= until {
                self.mode = ControlMode::Auto;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    fn controller(item_count: usize, now: Instant) -> CarouselController {
        CarouselController::new(item_count, &CarouselOptions::default(), now)
    }

    #[test]
    fn autoplay_advances_on_period() {
        let t0 = Instant::now();
        let mut c = controller(3, t0);

        assert!(!c.update(t0 + SEC));
        assert_eq!(c.active_index(), 0);

        assert!(c.update(t0 + 2 * SEC));
        assert_eq!(c.active_index(), 1);

        assert!(c.update(t0 + 4 * SEC));
        assert_eq!(c.active_index(), 2);

        // Wraps around the circle.
        assert!(c.update(t0 + 6 * SEC));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn hover_suppresses_autoplay_without_backlog() {
        let t0 = Instant::now();
        let mut c = controller(3, t0);
        c.set_hovered(true);

        // Many periods pass; none of them advance.
        assert!(!c.update(t0 + 10 * SEC));
        assert_eq!(c.active_index(), 0);

        // Un-hovering does not release a burst of queued ticks.
        c.set_hovered(false);
        assert!(!c.update(t0 + 10 * SEC + Duration::from_millis(100)));
        assert_eq!(c.active_index(), 0);

        // The next aligned deadline advances exactly once.
        assert!(c.update(t0 + 12 * SEC));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn manual_cooldown_suppresses_autoplay() {
        let t0 = Instant::now();
        let mut c = controller(3, t0);

        c.select(2, t0 + SEC);
        assert_eq!(c.active_index(), 2);
        assert!(c.is_manual(t0 + SEC));

        // Autoplay deadlines inside the 5s click cooldown are no-ops.
        assert!(!c.update(t0 + 2 * SEC));
        assert!(!c.update(t0 + 4 * SEC));
        assert_eq!(c.active_index(), 2);

        // The t0+6s deadline lands exactly when the cooldown expires and
        // advances again.
        assert!(c.update(t0 + 6 * SEC));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn reselection_supersedes_the_pending_cooldown() {
        let t0 = Instant::now();
        let mut c = controller(3, t0);

        c.select(1, t0);
        c.select(2, t0 + 2 * SEC);

        // Where the first cooldown alone would have expired (t0+5s), the
        // superseding one still holds.
        assert!(!c.update(t0 + 5 * SEC + Duration::from_millis(500)));
        assert!(c.is_manual(t0 + 5 * SEC + Duration::from_millis(500)));

        // Only the second deadline matters: manual until t0+7s.
        let _ = c.update(t0 + 7 * SEC);
        assert!(!c.is_manual(t0 + 7 * SEC));
    }

    #[test]
    fn stepping_wraps_in_both_directions() {
        let t0 = Instant::now();
        let mut c = controller(3, t0);

        c.step_prev(t0);
        assert_eq!(c.active_index(), 2);

        c.step_next(t0);
        assert_eq!(c.active_index(), 0);

        // Selection of an out-of-range index wraps too.
        c.select(7, t0);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn key_cooldown_is_shorter_than_click_cooldown() {
        let t0 = Instant::now();
        let mut c = controller(3, t0);

        c.step_next(t0);
        assert!(c.is_manual(t0 + 2 * SEC + Duration::from_millis(900)));
        assert!(!c.is_manual(t0 + 3 * SEC));

        c.select(0, t0 + 10 * SEC);
        assert!(c.is_manual(t0 + 14 * SEC + Duration::from_millis(900)));
        assert!(!c.is_manual(t0 + 15 * SEC));
    }

    #[test]
    fn zero_period_disables_autoplay() {
        let opts = CarouselOptions {
            autoplay_period_ms: 0,
            ..CarouselOptions::default()
        };
        let t0 = Instant::now();
        let mut c = CarouselController::new(3, &opts, t0);

        assert!(!c.update(t0 + 60 * SEC));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn click_then_cooldown_then_aligned_autoplay_resumes() {
        // Full arbitration walk-through with a 3s click cooldown.
        let opts = CarouselOptions {
            click_cooldown_ms: 3000,
            ..CarouselOptions::default()
        };
        let t0 = Instant::now();
        let mut c = CarouselController::new(3, &opts, t0);

        // Two seconds of quiet time: autoplay advances 0 -> 1.
        assert!(c.update(t0 + 2 * SEC));
        assert_eq!(c.active_index(), 1);

        // Click item 2 at t=2.1s: immediate focus, manual control on.
        let click_at = t0 + 2 * SEC + Duration::from_millis(100);
        c.select(2, click_at);
        assert_eq!(c.active_index(), 2);
        assert!(c.is_manual(click_at));

        // The t=4s autoplay deadline is suppressed.
        assert!(!c.update(t0 + 4 * SEC));
        assert_eq!(c.active_index(), 2);

        // Cooldown ends at t=5.1s; manual control is off again.
        let after_cooldown = t0 + 5 * SEC + Duration::from_millis(200);
        assert!(!c.update(after_cooldown));
        assert!(!c.is_manual(after_cooldown));

        // The next 2s-aligned deadline (t=6s) advances normally: 2 -> 0.
        assert!(c.update(t0 + 6 * SEC));
        assert_eq!(c.active_index(), 0);
    }
}
