//! Animation scheduler
//!
//! Owns every in-flight interpolation and steps them each frame. Consumers
//! hold a cloneable [`SchedulerHandle`] so values created anywhere in the
//! tree are ticked by the one host-driven loop.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::easing::Easing;
use crate::motion::Motion;
use crate::spring::Spring;

new_key_type! {
    /// Identifier of one scheduled interpolation
    pub struct DriveId;
}

/// One interpolation in flight
enum Drive {
    Spring(Spring),
    Tween {
        from: f32,
        to: f32,
        elapsed_ms: f32,
        duration_ms: f32,
        easing: Easing,
    },
}

impl Drive {
    fn new(initial: f32, motion: Motion) -> Self {
        match motion {
            Motion::Spring(config) => Drive::Spring(Spring::new(initial, config)),
            Motion::Tween {
                duration_ms,
                easing,
            } => Drive::Tween {
                from: initial,
                to: initial,
                elapsed_ms: 0.0,
                duration_ms: duration_ms as f32,
                easing,
            },
        }
    }

    fn value(&self) -> f32 {
        match self {
            Drive::Spring(spring) => spring.value(),
            Drive::Tween {
                from,
                to,
                elapsed_ms,
                duration_ms,
                easing,
            } => {
                if *duration_ms <= 0.0 || elapsed_ms >= duration_ms {
                    return *to;
                }
                let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
                from + (to - from) * easing.apply(progress)
            }
        }
    }

    fn target(&self) -> f32 {
        match self {
            Drive::Spring(spring) => spring.target(),
            Drive::Tween { to, .. } => *to,
        }
    }

    /// Retarget from the current interpolated position
    fn set_target(&mut self, target: f32) {
        let current = self.value();
        match self {
            Drive::Spring(spring) => spring.set_target(target),
            Drive::Tween {
                from,
                to,
                elapsed_ms,
                ..
            } => {
                *from = current;
                *to = target;
                *elapsed_ms = 0.0;
            }
        }
    }

    fn jump_to(&mut self, value: f32) {
        match self {
            Drive::Spring(spring) => spring.jump_to(value),
            Drive::Tween {
                from,
                to,
                elapsed_ms,
                ..
            } => {
                *from = value;
                *to = value;
                *elapsed_ms = 0.0;
            }
        }
    }

    fn is_settled(&self) -> bool {
        match self {
            Drive::Spring(spring) => spring.is_settled(),
            Drive::Tween {
                from,
                to,
                elapsed_ms,
                duration_ms,
                ..
            } => from == to || *duration_ms <= 0.0 || elapsed_ms >= duration_ms,
        }
    }

    fn step(&mut self, dt: f32) {
        match self {
            Drive::Spring(spring) => spring.step(dt),
            Drive::Tween {
                elapsed_ms,
                duration_ms,
                ..
            } => {
                *elapsed_ms = (*elapsed_ms + dt * 1000.0).min(*duration_ms);
            }
        }
    }
}

struct SchedulerInner {
    drives: SlotMap<DriveId, Drive>,
    last_frame: Instant,
}

/// Cheap, cloneable access to the scheduler for value owners
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    pub(crate) fn insert(&self, initial: f32, motion: Motion) -> DriveId {
        self.inner
            .lock()
            .unwrap()
            .drives
            .insert(Drive::new(initial, motion))
    }

    pub(crate) fn remove(&self, id: DriveId) {
        self.inner.lock().unwrap().drives.remove(id);
    }

    pub(crate) fn value(&self, id: DriveId) -> Option<f32> {
        self.inner.lock().unwrap().drives.get(id).map(Drive::value)
    }

    pub(crate) fn target(&self, id: DriveId) -> Option<f32> {
        self.inner.lock().unwrap().drives.get(id).map(Drive::target)
    }

    pub(crate) fn set_target(&self, id: DriveId, target: f32) {
        if let Some(drive) = self.inner.lock().unwrap().drives.get_mut(id) {
            drive.set_target(target);
        }
    }

    pub(crate) fn jump_to(&self, id: DriveId, value: f32) {
        if let Some(drive) = self.inner.lock().unwrap().drives.get_mut(id) {
            drive.jump_to(value);
        }
    }

    pub(crate) fn is_settled(&self, id: DriveId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .drives
            .get(id)
            .map_or(true, Drive::is_settled)
    }
}

/// The animation scheduler that ticks all active interpolations
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                drives: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle for creating values against this scheduler
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Advance all interpolations by `dt` seconds (deterministic; tests)
    pub fn advance(&self, dt: f32) {
        let mut inner = self.inner.lock().unwrap();
        inner.last_frame = Instant::now();
        for (_, drive) in inner.drives.iter_mut() {
            if !drive.is_settled() {
                drive.step(dt);
            }
        }
        tracing::trace!(dt, drives = inner.drives.len(), "scheduler advance");
    }

    /// Advance using the wall-clock delta since the previous frame
    pub fn tick(&self) {
        let dt = {
            let mut inner = self.inner.lock().unwrap();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f32();
            inner.last_frame = now;
            dt
        };
        self.advance(dt);
    }

    /// Whether any interpolation still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.inner
            .lock()
            .unwrap()
            .drives
            .iter()
            .any(|(_, drive)| !drive.is_settled())
    }

    /// Number of values currently registered
    pub fn drive_count(&self) -> usize {
        self.inner.lock().unwrap().drives.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
