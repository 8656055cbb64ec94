//! OS color-scheme signal
//!
//! The "prefers light/dark" media query, abstracted so the store can follow
//! preference changes while its origin is `System` and stop following them
//! the moment the user makes an explicit choice.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rustc_hash::FxHashMap;

use crate::store::ThemeMode;

/// Opaque handle to an active subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked when the OS preference changes
pub type SchemeCallback = Box<dyn Fn(ThemeMode) + Send + Sync>;

/// The OS light/dark preference signal
pub trait SystemScheme: Send + Sync {
    /// The current OS preference
    fn current(&self) -> ThemeMode;

    /// Register for preference-change notifications
    fn subscribe(&self, callback: SchemeCallback) -> SubscriptionId;

    /// Tear a subscription down; unknown or already-removed ids are a no-op
    fn unsubscribe(&self, id: SubscriptionId);
}

/// A [`SystemScheme`] fed by the host
///
/// Hosts plug their platform media-query listener into [`set_mode`]; the
/// relay fans the change out to subscribers. Also serves as the test double.
///
/// [`set_mode`]: SystemSchemeRelay::set_mode
pub struct SystemSchemeRelay {
    mode: Mutex<ThemeMode>,
    subscribers: Mutex<FxHashMap<SubscriptionId, SchemeCallback>>,
    next_id: AtomicU64,
}

impl SystemSchemeRelay {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: Mutex::new(mode),
            subscribers: Mutex::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Record a new OS preference and notify subscribers
    pub fn set_mode(&self, mode: ThemeMode) {
        {
            let mut current = self.mode.lock().unwrap();
            if *current == mode {
                return;
            }
            *current = mode;
        }
        tracing::debug!(?mode, "system color scheme changed");

        // Snapshot outside the subscriber lock so a callback may re-enter
        // subscribe/unsubscribe without deadlocking
        let ids: Vec<SubscriptionId> = self.subscribers.lock().unwrap().keys().copied().collect();
        for id in ids {
            let callback = self.subscribers.lock().unwrap().remove(&id);
            if let Some(callback) = callback {
                callback(mode);
                self.subscribers.lock().unwrap().insert(id, callback);
            }
        }
    }

    /// Number of live subscriptions (test hook)
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl SystemScheme for SystemSchemeRelay {
    fn current(&self) -> ThemeMode {
        *self.mode.lock().unwrap()
    }

    fn subscribe(&self, callback: SchemeCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().unwrap().insert(id, callback);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().unwrap().remove(&id);
    }
}
