//! Animated value handle
//!
//! An [`AnimatedValue`] is the engine's unit of continuous state: a named
//! owner creates it against a scheduler, retargets it on discrete state
//! changes, and reads the interpolated value each frame. Dropping the handle
//! removes the interpolation from the scheduler.

use crate::motion::Motion;
use crate::scheduler::{DriveId, SchedulerHandle};

/// A scalar that tracks its target continuously under a [`Motion`] model
pub struct AnimatedValue {
    handle: SchedulerHandle,
    id: DriveId,
    motion: Motion,
}

impl AnimatedValue {
    /// Create a value at rest at `initial`
    pub fn new(handle: SchedulerHandle, initial: f32, motion: Motion) -> Self {
        let id = handle.insert(initial, motion);
        Self { handle, id, motion }
    }

    /// Current interpolated value
    pub fn get(&self) -> f32 {
        // The drive exists for as long as this handle does
        self.handle.value(self.id).unwrap_or(0.0)
    }

    /// The value currently being approached
    pub fn target(&self) -> f32 {
        self.handle.target(self.id).unwrap_or(0.0)
    }

    /// Retarget smoothly from the current position
    pub fn set_target(&self, target: f32) {
        self.handle.set_target(self.id, target);
    }

    /// Explicit cut: snap to `value` with no transition
    pub fn jump_to(&self, value: f32) {
        self.handle.jump_to(self.id, value);
    }

    /// Whether the value has reached its target
    pub fn is_settled(&self) -> bool {
        self.handle.is_settled(self.id)
    }

    /// Whether an interpolation is still in flight
    pub fn is_animating(&self) -> bool {
        !self.is_settled()
    }

    /// The motion model this value was created with
    pub fn motion(&self) -> Motion {
        self.motion
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        self.handle.remove(self.id);
    }
}

impl std::fmt::Debug for AnimatedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedValue")
            .field("value", &self.get())
            .field("target", &self.target())
            .field("settled", &self.is_settled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::scheduler::AnimationScheduler;

    #[test]
    fn test_tracks_target() {
        let scheduler = AnimationScheduler::new();
        let value = AnimatedValue::new(scheduler.handle(), 0.0, Motion::default());
        value.set_target(1.0);

        for _ in 0..1_000 {
            scheduler.advance(1.0 / 120.0);
            if value.is_settled() {
                break;
            }
        }
        assert!(value.is_settled());
        assert!((value.get() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_tween_retarget_starts_from_current() {
        let scheduler = AnimationScheduler::new();
        let value = AnimatedValue::new(
            scheduler.handle(),
            0.0,
            Motion::tween(100, Easing::Linear),
        );
        value.set_target(1.0);
        scheduler.advance(0.05);
        let mid = value.get();
        assert!((mid - 0.5).abs() < 1e-3);

        value.set_target(0.0);
        // First frame after retarget still reads the mid value
        assert!((value.get() - mid).abs() < 1e-3);
    }

    #[test]
    fn test_drop_removes_drive() {
        let scheduler = AnimationScheduler::new();
        let value = AnimatedValue::new(scheduler.handle(), 0.0, Motion::default());
        value.set_target(1.0);
        assert_eq!(scheduler.drive_count(), 1);
        assert!(scheduler.has_active_animations());

        drop(value);
        assert_eq!(scheduler.drive_count(), 0);
        assert!(!scheduler.has_active_animations());
    }

    #[test]
    fn test_independent_values_same_motion_agree() {
        let scheduler = AnimationScheduler::new();
        let a = AnimatedValue::new(scheduler.handle(), 0.0, Motion::default());
        let b = AnimatedValue::new(scheduler.handle(), 0.0, Motion::default());
        a.set_target(1.0);
        b.set_target(1.0);

        for _ in 0..50 {
            scheduler.advance(1.0 / 120.0);
            assert!((a.get() - b.get()).abs() < 1e-6);
        }
    }
}
