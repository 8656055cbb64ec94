//! Overlay lifecycle controller
//!
//! A cyclic phase machine reused for the component's whole lifetime:
//!
//! ```text
//! Closed -> Opening -> Open -> Closing -> Closed -> ...
//! ```
//!
//! Phase advance out of `Opening`/`Closing` is driven by the overlay's
//! animated progress value settling, so detaching content and running
//! "fully closed" side effects can never drift from the visuals, however
//! the animation timing changes.

use lumen_animation::{AnimatedValue, Motion, SchedulerHandle};
use lumen_core::events::{event_types, Event};
use lumen_core::hit::HitTree;

use crate::dismiss::{DismissPolicy, DismissRouter, WatcherId};
use crate::scroll_lock::ScrollLock;

/// Lifecycle phase of an overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Side effect run on entering a resting phase
pub type Effect = Box<dyn FnMut() + Send>;

struct DismissBinding {
    router: DismissRouter,
    policy: DismissPolicy,
    watcher: Option<WatcherId>,
}

/// Open/close controller for one overlay (dropdown, modal, drawer)
///
/// The controller persists across opens and closes; only its visual phase
/// cycles. `open()` and `close()` are idempotent, and reversing direction
/// mid-animation redirects the in-flight value instead of waiting for the
/// far end - a fast open-then-close never flashes the fully-open state.
pub struct OverlayController {
    /// 0.0 fully closed, 1.0 fully open
    progress: AnimatedValue,
    phase: OverlayPhase,
    on_fully_open: Vec<Effect>,
    on_fully_closed: Vec<Effect>,
    scroll_lock: Option<ScrollLock>,
    dismiss: Option<DismissBinding>,
}

impl OverlayController {
    /// Create a controller resting closed
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_motion(handle, Motion::default())
    }

    pub fn with_motion(handle: SchedulerHandle, motion: Motion) -> Self {
        Self {
            progress: AnimatedValue::new(handle, 0.0, motion),
            phase: OverlayPhase::Closed,
            on_fully_open: Vec::new(),
            on_fully_closed: Vec::new(),
            scroll_lock: None,
            dismiss: None,
        }
    }

    /// Run `effect` every time the overlay finishes opening
    pub fn on_fully_open<F: FnMut() + Send + 'static>(&mut self, effect: F) {
        self.on_fully_open.push(Box::new(effect));
    }

    /// Run `effect` every time the overlay finishes closing
    pub fn on_fully_closed<F: FnMut() + Send + 'static>(&mut self, effect: F) {
        self.on_fully_closed.push(Box::new(effect));
    }

    /// Drawer variant: hold the page scroll lock while not fully closed
    pub fn lock_scroll(&mut self, lock: ScrollLock) {
        self.scroll_lock = Some(lock);
    }

    /// Dismiss on pointer-down outside the overlay and its allow-list
    ///
    /// The policy is installed on `router` while the overlay is opening or
    /// open and removed on reaching closed (or on drop, if the component
    /// unmounts mid-animation).
    pub fn bind_dismiss(&mut self, router: DismissRouter, policy: DismissPolicy) {
        self.dismiss = Some(DismissBinding {
            router,
            policy,
            watcher: None,
        });
    }

    // ========== Lifecycle ==========

    /// Head for fully open; a no-op while already opening or open
    pub fn open(&mut self) {
        match self.phase {
            OverlayPhase::Opening | OverlayPhase::Open => {}
            OverlayPhase::Closed | OverlayPhase::Closing => {
                tracing::debug!(from = ?self.phase, "overlay opening");
                self.phase = OverlayPhase::Opening;
                self.progress.set_target(1.0);
                if let Some(lock) = &self.scroll_lock {
                    lock.engage();
                }
                if let Some(binding) = &mut self.dismiss {
                    if binding.watcher.is_none() {
                        binding.watcher = Some(binding.router.install(binding.policy.clone()));
                    }
                }
            }
        }
    }

    /// Head for fully closed; a no-op while already closing or closed
    ///
    /// Called mid-open, this redirects the in-flight animation toward the
    /// closed target from its current position.
    pub fn close(&mut self) {
        match self.phase {
            OverlayPhase::Closing | OverlayPhase::Closed => {}
            OverlayPhase::Opening | OverlayPhase::Open => {
                tracing::debug!(from = ?self.phase, "overlay closing");
                self.phase = OverlayPhase::Closing;
                self.progress.set_target(0.0);
            }
        }
    }

    /// Toggle toward the opposite resting state
    pub fn toggle(&mut self) {
        match self.phase {
            OverlayPhase::Closed | OverlayPhase::Closing => self.open(),
            OverlayPhase::Opening | OverlayPhase::Open => self.close(),
        }
    }

    /// Advance the phase machine after the scheduler ticked
    ///
    /// Returns true while a transition is still in flight. Completion
    /// effects fire here, exactly once per transition into the phase.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            OverlayPhase::Opening if self.progress.is_settled() => {
                self.phase = OverlayPhase::Open;
                tracing::debug!("overlay fully open");
                for effect in &mut self.on_fully_open {
                    effect();
                }
            }
            OverlayPhase::Closing if self.progress.is_settled() => {
                self.phase = OverlayPhase::Closed;
                tracing::debug!("overlay fully closed");
                if let Some(lock) = &self.scroll_lock {
                    lock.release();
                }
                if let Some(binding) = &mut self.dismiss {
                    if let Some(watcher) = binding.watcher.take() {
                        binding.router.remove(watcher);
                    }
                }
                for effect in &mut self.on_fully_closed {
                    effect();
                }
            }
            _ => {}
        }
        matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Closing)
    }

    /// Route a pointer-down through this overlay's dismissal policy
    pub fn on_pointer_down(&mut self, tree: &dyn HitTree, event: &Event) {
        if event.event_type != event_types::POINTER_DOWN {
            return;
        }
        if !matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open) {
            return;
        }
        let Some(binding) = &self.dismiss else {
            return;
        };
        if binding.policy.should_dismiss(tree, event.target) {
            tracing::debug!(target = event.target, "outside pointer-down dismissed overlay");
            self.close();
        }
    }

    // ========== Reads ==========

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Current animated progress (0.0 closed .. 1.0 open)
    pub fn progress(&self) -> f32 {
        self.progress.get()
    }

    /// Whether the view layer should keep the overlay content mounted
    pub fn content_mounted(&self) -> bool {
        self.phase != OverlayPhase::Closed
    }

    /// The installed dismissal watcher, while opening or open
    pub fn watcher_id(&self) -> Option<WatcherId> {
        self.dismiss.as_ref().and_then(|b| b.watcher)
    }
}

impl Drop for OverlayController {
    fn drop(&mut self) {
        // Unmount mid-animation: never leave a watcher or the scroll lock
        // dangling
        if let Some(binding) = &mut self.dismiss {
            if let Some(watcher) = binding.watcher.take() {
                binding.router.remove(watcher);
            }
        }
        if self.phase != OverlayPhase::Closed {
            if let Some(lock) = &self.scroll_lock {
                lock.release();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_animation::AnimationScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn settle(scheduler: &AnimationScheduler, controller: &mut OverlayController) {
        let mut frames = 0;
        while controller.tick() {
            scheduler.advance(1.0 / 120.0);
            frames += 1;
            assert!(frames < 10_000, "overlay transition never settled");
        }
    }

    #[test]
    fn test_full_cycle() {
        let scheduler = AnimationScheduler::new();
        let mut overlay = OverlayController::new(scheduler.handle());
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert!(!overlay.content_mounted());

        overlay.open();
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        assert!(overlay.content_mounted());
        settle(&scheduler, &mut overlay);
        assert_eq!(overlay.phase(), OverlayPhase::Open);
        assert!((overlay.progress() - 1.0).abs() < 0.01);

        overlay.close();
        assert_eq!(overlay.phase(), OverlayPhase::Closing);
        settle(&scheduler, &mut overlay);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert!(overlay.progress().abs() < 0.01);
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let scheduler = AnimationScheduler::new();
        let mut overlay = OverlayController::new(scheduler.handle());
        let closes = Arc::new(AtomicUsize::new(0));
        let closes_clone = Arc::clone(&closes);
        overlay.on_fully_closed(move || {
            closes_clone.fetch_add(1, Ordering::SeqCst);
        });

        overlay.open();
        overlay.open();
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        settle(&scheduler, &mut overlay);

        overlay.close();
        settle(&scheduler, &mut overlay);
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        // close() on a closed controller changes nothing and re-fires nothing
        overlay.close();
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        overlay.tick();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_mid_open_redirects_without_reaching_open() {
        let scheduler = AnimationScheduler::new();
        let mut overlay = OverlayController::new(scheduler.handle());
        let opens = Arc::new(AtomicUsize::new(0));
        let opens_clone = Arc::clone(&opens);
        overlay.on_fully_open(move || {
            opens_clone.fetch_add(1, Ordering::SeqCst);
        });

        overlay.open();
        for _ in 0..3 {
            scheduler.advance(1.0 / 120.0);
            overlay.tick();
        }
        let mid = overlay.progress();
        assert!(mid > 0.0 && mid < 1.0);

        overlay.close();
        assert_eq!(overlay.phase(), OverlayPhase::Closing);
        // The redirect starts from the current position, no flash of open
        assert!((overlay.progress() - mid).abs() < 0.05);

        settle(&scheduler, &mut overlay);
        assert_eq!(overlay.phase(), OverlayPhase::Closed);
        assert_eq!(opens.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reopen_mid_close() {
        let scheduler = AnimationScheduler::new();
        let mut overlay = OverlayController::new(scheduler.handle());

        overlay.open();
        settle(&scheduler, &mut overlay);
        overlay.close();
        for _ in 0..3 {
            scheduler.advance(1.0 / 120.0);
            overlay.tick();
        }

        overlay.open();
        assert_eq!(overlay.phase(), OverlayPhase::Opening);
        settle(&scheduler, &mut overlay);
        assert_eq!(overlay.phase(), OverlayPhase::Open);
    }
}
