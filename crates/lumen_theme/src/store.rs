//! The theme store
//!
//! Tab-wide resolved theme state with a single writer path. The resolved
//! mode is always concrete (`light` or `dark`); "system" is an *origin*, not
//! a third mode. Mode changes animate the color tokens when a scheduler is
//! attached, in the same progress-lerp style widgets use for their own
//! banks, so every surface fades in lockstep.

use std::sync::{Arc, Mutex, OnceLock, RwLock, Weak};

use lumen_animation::{AnimatedValue, Motion, SchedulerHandle};
use serde::{Deserialize, Serialize};

use crate::palette::{ColorToken, ColorTokens, ThemePalette};
use crate::prefs::PreferenceStore;
use crate::system::{SubscriptionId, SystemScheme};

/// Global theme store instance
static THEME_STORE: OnceLock<ThemeStore> = OnceLock::new();

/// The resolved visual mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The literal string persisted to storage
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything but the two literals is `None`
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Where the resolved mode came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeOrigin {
    /// The user picked a mode; it is persisted
    Explicit,
    /// Inherited from the OS preference; follows its changes
    System,
}

/// Input to [`ThemeStore::set_theme`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSetting {
    Light,
    Dark,
    /// Follow the OS preference
    System,
}

/// The resolved theme: a concrete mode plus its origin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTheme {
    pub mode: ThemeMode,
    pub origin: ThemeOrigin,
}

/// Theme transition animation state
#[derive(Default)]
struct ThemeTransition {
    /// Animated progress (0.0 = old palette, 100.0 = new palette)
    progress: Option<AnimatedValue>,
    from_colors: Option<ColorTokens>,
    to_colors: Option<ColorTokens>,
}

/// Change listener invoked with the newly resolved mode
pub type ChangeListener = Box<dyn Fn(ThemeMode) + Send + Sync>;

struct StoreInner {
    palette: ThemePalette,
    prefs: Box<dyn PreferenceStore>,
    system: Arc<dyn SystemScheme>,
    resolved: RwLock<ResolvedTheme>,
    /// Current (possibly mid-transition) color tokens
    colors: RwLock<ColorTokens>,
    scheduler: RwLock<Option<SchedulerHandle>>,
    transition: Mutex<ThemeTransition>,
    subscription: Mutex<Option<SubscriptionId>>,
    listeners: Mutex<Vec<ChangeListener>>,
}

/// Tab-wide theme state; cheap to clone, all clones share one store
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl ThemeStore {
    /// Create a store, resolving the initial theme from the persisted
    /// preference or, absent a valid one, the OS signal
    pub fn new(
        palette: ThemePalette,
        prefs: Box<dyn PreferenceStore>,
        system: Arc<dyn SystemScheme>,
    ) -> Self {
        let resolved = match prefs.load().as_deref().and_then(ThemeMode::from_str) {
            Some(mode) => ResolvedTheme {
                mode,
                origin: ThemeOrigin::Explicit,
            },
            None => ResolvedTheme {
                mode: system.current(),
                origin: ThemeOrigin::System,
            },
        };
        tracing::debug!(?resolved, "theme store initialized");

        let colors = palette.for_mode(resolved.mode).clone();
        let store = Self {
            inner: Arc::new(StoreInner {
                palette,
                prefs,
                system,
                resolved: RwLock::new(resolved),
                colors: RwLock::new(colors),
                scheduler: RwLock::new(None),
                transition: Mutex::new(ThemeTransition::default()),
                subscription: Mutex::new(None),
                listeners: Mutex::new(Vec::new()),
            }),
        };

        if resolved.origin == ThemeOrigin::System {
            store.subscribe_system();
        }
        store
    }

    /// Install the global store (call once at startup)
    ///
    /// # Panics
    ///
    /// Panics if called more than once.
    pub fn init(store: ThemeStore) {
        if THEME_STORE.set(store).is_err() {
            panic!("ThemeStore::init() called more than once");
        }
    }

    /// Get the global store instance
    ///
    /// # Panics
    ///
    /// Panics if `init()` has not been called.
    pub fn get() -> &'static ThemeStore {
        THEME_STORE
            .get()
            .expect("ThemeStore not initialized. Call ThemeStore::init() at startup.")
    }

    /// Try to get the global store (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeStore> {
        THEME_STORE.get()
    }

    /// Attach the animation scheduler so mode changes fade instead of swap
    pub fn set_scheduler(&self, handle: SchedulerHandle) {
        *self.inner.scheduler.write().unwrap() = Some(handle);
    }

    // ========== Reads ==========

    /// The resolved theme (concrete mode + origin)
    pub fn state(&self) -> ResolvedTheme {
        *self.inner.resolved.read().unwrap()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state().mode
    }

    pub fn origin(&self) -> ThemeOrigin {
        self.state().origin
    }

    /// Current (possibly mid-transition) color for a token
    pub fn color(&self, token: ColorToken) -> lumen_core::Color {
        self.inner.colors.read().unwrap().get(token)
    }

    /// Current token set
    pub fn colors(&self) -> ColorTokens {
        self.inner.colors.read().unwrap().clone()
    }

    // ========== The single writer path ==========

    /// Apply a theme selection
    ///
    /// Explicit modes persist and stop following the OS; `System` resolves
    /// from the current OS preference, clears the persisted entry, and
    /// follows subsequent OS changes.
    pub fn set_theme(&self, setting: ThemeSetting) {
        match setting {
            ThemeSetting::Light => self.set_explicit(ThemeMode::Light),
            ThemeSetting::Dark => self.set_explicit(ThemeMode::Dark),
            ThemeSetting::System => {
                let mode = self.inner.system.current();
                {
                    let mut resolved = self.inner.resolved.write().unwrap();
                    resolved.origin = ThemeOrigin::System;
                }
                self.inner.prefs.clear();
                self.subscribe_system();
                self.inner.transition_to(mode);
            }
        }
    }

    /// Toggle between explicit light and dark
    pub fn toggle(&self) {
        match self.mode().toggle() {
            ThemeMode::Light => self.set_theme(ThemeSetting::Light),
            ThemeMode::Dark => self.set_theme(ThemeSetting::Dark),
        }
    }

    fn set_explicit(&self, mode: ThemeMode) {
        {
            let mut resolved = self.inner.resolved.write().unwrap();
            resolved.origin = ThemeOrigin::Explicit;
        }
        self.inner.prefs.store(mode.as_str());
        self.unsubscribe_system();
        self.inner.transition_to(mode);
    }

    // ========== Transition pump ==========

    /// Update mid-transition colors; returns true while more frames are
    /// needed. Hosts call this from their frame loop after ticking the
    /// scheduler.
    pub fn tick(&self) -> bool {
        self.inner.tick()
    }

    /// Whether a theme transition animation is in progress
    pub fn is_animating(&self) -> bool {
        let transition = self.inner.transition.lock().unwrap();
        transition
            .progress
            .as_ref()
            .map(AnimatedValue::is_animating)
            .unwrap_or(false)
    }

    // ========== Listeners ==========

    /// Register a callback invoked on every resolved mode change
    pub fn on_change(&self, listener: ChangeListener) {
        self.inner.listeners.lock().unwrap().push(listener);
    }

    // ========== OS signal subscription ==========

    fn subscribe_system(&self) {
        let mut subscription = self.inner.subscription.lock().unwrap();
        if subscription.is_some() {
            return;
        }
        let weak: Weak<StoreInner> = Arc::downgrade(&self.inner);
        let id = self.inner.system.subscribe(Box::new(move |mode| {
            if let Some(inner) = weak.upgrade() {
                inner.on_system_change(mode);
            }
        }));
        *subscription = Some(id);
    }

    fn unsubscribe_system(&self) {
        if let Some(id) = self.inner.subscription.lock().unwrap().take() {
            self.inner.system.unsubscribe(id);
        }
    }
}

impl StoreInner {
    /// OS preference changed; only honored while the origin is `System`
    fn on_system_change(&self, mode: ThemeMode) {
        if self.resolved.read().unwrap().origin != ThemeOrigin::System {
            return;
        }
        self.transition_to(mode);
    }

    fn transition_to(&self, mode: ThemeMode) {
        {
            let mut resolved = self.resolved.write().unwrap();
            if resolved.mode == mode {
                return;
            }
            tracing::debug!(from = ?resolved.mode, to = ?mode, "theme mode change");
            resolved.mode = mode;
        }

        let old_colors = self.colors.read().unwrap().clone();
        let new_colors = self.palette.for_mode(mode).clone();

        let handle = self.scheduler.read().unwrap().clone();
        if let Some(handle) = handle {
            // Animated: drive a progress value and lerp on tick. Scaled to
            // 0..100 so the spring settle epsilon stays perceptually tight.
            let mut transition = self.transition.lock().unwrap();
            let progress = AnimatedValue::new(handle, 0.0, Motion::default());
            progress.set_target(100.0);
            transition.progress = Some(progress);
            transition.from_colors = Some(old_colors.clone());
            transition.to_colors = Some(new_colors);
            drop(transition);
            // Readers keep seeing the old palette until the first tick
            *self.colors.write().unwrap() = old_colors;
        } else {
            *self.colors.write().unwrap() = new_colors;
        }

        let listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter() {
            listener(mode);
        }
    }

    fn tick(&self) -> bool {
        let mut transition = self.transition.lock().unwrap();
        let Some(progress) = transition.progress.as_ref() else {
            return false;
        };

        let raw = progress.get();
        let t = (raw / 100.0).clamp(0.0, 1.0);
        let at_target = (raw - 100.0).abs() < 1.0;
        tracing::trace!(raw, t, at_target, "theme transition tick");

        if let (Some(from), Some(to)) = (&transition.from_colors, &transition.to_colors) {
            let interpolated = if at_target {
                to.clone()
            } else {
                ColorTokens::lerp(from, to, t)
            };
            drop(transition);
            *self.colors.write().unwrap() = interpolated;

            if at_target {
                let mut transition = self.transition.lock().unwrap();
                transition.progress = None;
                transition.from_colors = None;
                transition.to_colors = None;
                return false;
            }
            return true;
        }

        transition.progress = None;
        false
    }
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.lock().unwrap().take() {
            self.system.unsubscribe(id);
        }
    }
}
