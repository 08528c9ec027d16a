//! Per-item eased movement between stage slots.

use web_time::{Duration, Instant};

use crate::carousel::Placement;
use crate::easing::EasingFunction;

/// An in-flight move of one item toward a new placement.
#[derive(Debug, Clone)]
struct SlotTransition {
    from: Placement,
    target: Placement,
    start: Instant,
}

#[derive(Debug, Clone)]
struct SlotState {
    current: Placement,
    transition: Option<SlotTransition>,
}

/// Interpolates every item's placement toward its stage slot.
///
/// Retargeting an item mid-flight restarts the move from its *current
/// interpolated* placement, so rapid selection changes glide instead of
/// jumping.
#[derive(Debug, Clone)]
pub struct SlotAnimator {
    slots: Vec<SlotState>,
    duration: Duration,
    easing: EasingFunction,
}

impl SlotAnimator {
    /// An animator with every item snapped to its initial placement.
    #[must_use]
    pub fn new(
        initial: &[Placement],
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            slots: initial
                .iter()
                .map(|p| SlotState {
                    current: *p,
                    transition: None,
                })
                .collect(),
            duration,
            easing,
        }
    }

    /// Number of animated items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the animator tracks no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether no transition is currently running.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|s| s.transition.is_none())
    }

    /// Begin moving `index` toward `target`. A no-op when the item is
    /// already there or already heading there; out-of-range indices are
    /// ignored.
    pub fn retarget(
        &mut self,
        index: usize,
        target: Placement,
        now: Instant,
    ) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        let heading_to = slot
            .transition
            .as_ref()
            .map_or(slot.current, |t| t.target);
        if heading_to == target {
            return;
        }
        if self.duration.is_zero() {
            slot.current = target;
            slot.transition = None;
            return;
        }
        slot.transition = Some(SlotTransition {
            from: slot.current,
            target,
            start: now,
        });
    }

    /// Advance all transitions; completed ones snap to their target.
    pub fn update(&mut self, now: Instant) {
        let duration = self.duration;
        for slot in &mut self.slots {
            let Some(transition) = &slot.transition else {
                continue;
            };
            let elapsed = now.saturating_duration_since(transition.start);
            let progress = if duration.is_zero() {
                1.0
            } else {
                (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
            };
            let eased = self.easing.evaluate(progress);
            slot.current = Placement {
                position: transition
                    .from
                    .position
                    .lerp(transition.target.position, eased),
                scale: transition.from.scale
                    + (transition.target.scale - transition.from.scale)
                        * eased,
            };
            if progress >= 1.0 {
                slot.transition = None;
            }
        }
    }

    /// Current interpolated placement of `index`.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<Placement> {
        self.slots.get(index).map(|s| s.current)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    const DURATION: Duration = Duration::from_millis(400);

    fn at(x: f32, scale: f32) -> Placement {
        Placement {
            position: Vec3::new(x, 0.0, 0.0),
            scale,
        }
    }

    fn animator(start: Placement) -> SlotAnimator {
        SlotAnimator::new(&[start], DURATION, EasingFunction::Linear)
    }

    #[test]
    fn interpolates_linearly_toward_the_target() {
        let t0 = Instant::now();
        let mut anim = animator(at(0.0, 1.0));
        anim.retarget(0, at(4.0, 2.0), t0);

        anim.update(t0 + DURATION / 2);
        let Some(mid) = anim.placement(0) else {
            unreachable!("slot 0 exists");
        };
        assert!((mid.position.x - 2.0).abs() < 1e-4);
        assert!((mid.scale - 1.5).abs() < 1e-4);
        assert!(!anim.is_settled());
    }

    #[test]
    fn completion_snaps_to_the_target() {
        let t0 = Instant::now();
        let mut anim = animator(at(0.0, 1.0));
        anim.retarget(0, at(4.0, 2.0), t0);

        anim.update(t0 + DURATION * 3);
        let Some(done) = anim.placement(0) else {
            unreachable!("slot 0 exists");
        };
        assert_eq!(done.position.x, 4.0);
        assert_eq!(done.scale, 2.0);
        assert!(anim.is_settled());
    }

    #[test]
    fn retarget_mid_flight_resumes_from_the_current_placement() {
        let t0 = Instant::now();
        let mut anim = animator(at(0.0, 1.0));
        anim.retarget(0, at(4.0, 1.0), t0);
        anim.update(t0 + DURATION / 2);

        // Halfway there, head somewhere else: motion continues from x=2.
        anim.retarget(0, at(-4.0, 1.0), t0 + DURATION / 2);
        let Some(start_of_second) = anim.placement(0) else {
            unreachable!("slot 0 exists");
        };
        assert!((start_of_second.position.x - 2.0).abs() < 1e-4);

        anim.update(t0 + DURATION);
        let Some(mid_second) = anim.placement(0) else {
            unreachable!("slot 0 exists");
        };
        // Halfway from 2 to -4 is -1; no jump to the first target.
        assert!((mid_second.position.x + 1.0).abs() < 1e-4);
    }

    #[test]
    fn retarget_to_the_same_destination_is_a_no_op() {
        let t0 = Instant::now();
        let mut anim = animator(at(1.0, 1.0));
        anim.retarget(0, at(1.0, 1.0), t0);
        assert!(anim.is_settled());
    }

    #[test]
    fn zero_duration_snaps_immediately() {
        let t0 = Instant::now();
        let mut anim = SlotAnimator::new(
            &[at(0.0, 1.0)],
            Duration::ZERO,
            EasingFunction::Linear,
        );
        anim.retarget(0, at(3.0, 2.0), t0);
        let Some(placement) = anim.placement(0) else {
            unreachable!("slot 0 exists");
        };
        assert_eq!(placement.position.x, 3.0);
        assert!(anim.is_settled());
    }
}
