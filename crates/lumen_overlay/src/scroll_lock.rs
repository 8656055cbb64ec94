//! Page scroll lock
//!
//! The page's scroll behavior is one shared boolean resource. Ownership is
//! deliberately narrow: only the drawer controller's opening transition may
//! engage it, and only its settled-closed transition may release it, so two
//! code paths can never fight over the lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle to the page scroll lock
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage the lock; engaging an already-held lock is a no-op
    pub fn engage(&self) {
        if !self.locked.swap(true, Ordering::SeqCst) {
            tracing::debug!("page scroll locked");
        }
    }

    /// Release the lock; releasing an idle lock is a no-op
    pub fn release(&self) {
        if self.locked.swap(false, Ordering::SeqCst) {
            tracing::debug!("page scroll unlocked");
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}
