//! Theme-driven value banks
//!
//! A [`ThemeBank`] is a [`ValueBank`] keyed by [`ThemeMode`] and wired to a
//! [`ThemeStore`]: whenever the resolved mode changes, every value in the
//! bank retargets toward its entry for the new mode. Each consumer owns its
//! own bank, but banks attached to the same store animate in lockstep
//! because they share the default motion.
//!
//! Target tables are validated for *both* modes at attach time, so a row
//! missing a light or dark entry fails at the point of misconfiguration,
//! never mid-transition.

use std::sync::{Arc, Weak};

use lumen_animation::{AnimatedValue, BankError, Motion, SchedulerHandle, ValueBank};

use crate::store::{ThemeMode, ThemeStore};

/// Builder collecting named rows before wiring them to a store
pub struct ThemeBankBuilder {
    bank: ValueBank<ThemeMode>,
}

impl ThemeBankBuilder {
    /// Start a bank using the shared default motion
    pub fn new(handle: SchedulerHandle) -> Self {
        Self {
            bank: ValueBank::new(handle),
        }
    }

    /// Start a bank with an explicit motion (emphasis override)
    pub fn with_motion(handle: SchedulerHandle, motion: Motion) -> Self {
        Self {
            bank: ValueBank::with_motion(handle, motion),
        }
    }

    /// Define a value with its light and dark targets
    pub fn define(mut self, name: impl Into<String>, light: f32, dark: f32) -> Self {
        // Initial value is corrected to the store's resolved mode at attach
        self.bank.define(
            name,
            light,
            [(ThemeMode::Light, light), (ThemeMode::Dark, dark)],
        );
        self
    }

    /// Validate the rows, rest them at the store's current mode, and follow
    /// the store's changes from now on
    pub fn attach(self, store: &ThemeStore) -> Result<ThemeBank, BankError> {
        self.bank.validate(ThemeMode::Light)?;
        self.bank.validate(ThemeMode::Dark)?;
        self.bank.snap(store.mode())?;

        let bank = Arc::new(self.bank);
        let weak: Weak<ValueBank<ThemeMode>> = Arc::downgrade(&bank);
        store.on_change(Box::new(move |mode| {
            if let Some(bank) = weak.upgrade() {
                // Both variants were validated at attach
                let _ = bank.apply(mode);
            }
        }));

        Ok(ThemeBank { bank })
    }
}

/// A set of animated values tracking the resolved theme mode
#[derive(Clone)]
pub struct ThemeBank {
    bank: Arc<ValueBank<ThemeMode>>,
}

impl ThemeBank {
    /// Current interpolated value of `name`
    pub fn get(&self, name: &str) -> Result<f32, BankError> {
        self.bank.get(name)
    }

    /// Access the underlying [`AnimatedValue`] of `name`
    pub fn value(&self, name: &str) -> Result<&AnimatedValue, BankError> {
        self.bank.value(name)
    }

    /// Whether any value in the bank is still animating
    pub fn is_animating(&self) -> bool {
        self.bank.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ThemePalette;
    use crate::prefs::MemoryPreferenceStore;
    use crate::store::ThemeSetting;
    use crate::system::SystemSchemeRelay;
    use lumen_animation::AnimationScheduler;

    fn light_store() -> ThemeStore {
        ThemeStore::new(
            ThemePalette::default(),
            Box::new(MemoryPreferenceStore::new()),
            Arc::new(SystemSchemeRelay::new(ThemeMode::Light)),
        )
    }

    #[test]
    fn test_bank_rests_at_current_mode_on_attach() {
        let scheduler = AnimationScheduler::new();
        let store = light_store();
        store.set_theme(ThemeSetting::Dark);

        let bank = ThemeBankBuilder::new(scheduler.handle())
            .define("panel-opacity", 0.95, 0.80)
            .attach(&store)
            .unwrap();

        // Snapped, not animated, to the dark value
        assert_eq!(bank.get("panel-opacity").unwrap(), 0.80);
        assert!(!bank.is_animating());
    }

    #[test]
    fn test_bank_follows_mode_changes() {
        let scheduler = AnimationScheduler::new();
        let store = light_store();
        let bank = ThemeBankBuilder::new(scheduler.handle())
            .define("glow", 0.1, 0.9)
            .attach(&store)
            .unwrap();

        store.set_theme(ThemeSetting::Dark);
        assert_eq!(bank.value("glow").unwrap().target(), 0.9);
        assert!(bank.is_animating());

        for _ in 0..2_000 {
            scheduler.advance(1.0 / 120.0);
            if !bank.is_animating() {
                break;
            }
        }
        assert!((bank.get("glow").unwrap() - 0.9).abs() < 0.01);
    }

    #[test]
    fn test_dropped_bank_stops_following() {
        let scheduler = AnimationScheduler::new();
        let store = light_store();
        let bank = ThemeBankBuilder::new(scheduler.handle())
            .define("glow", 0.1, 0.9)
            .attach(&store)
            .unwrap();

        drop(bank);
        assert_eq!(scheduler.drive_count(), 0);
        // The dangling listener must be a no-op, not a panic
        store.set_theme(ThemeSetting::Dark);
    }

    #[test]
    fn test_unknown_name_fails_fast() {
        let scheduler = AnimationScheduler::new();
        let store = light_store();
        let bank = ThemeBankBuilder::new(scheduler.handle())
            .define("glow", 0.1, 0.9)
            .attach(&store)
            .unwrap();

        assert!(bank.get("typo").is_err());
    }
}
