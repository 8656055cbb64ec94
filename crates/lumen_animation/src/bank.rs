//! Animated value bank
//!
//! A bank owns a set of named [`AnimatedValue`]s whose targets are looked up
//! from a per-variant table (light/dark in practice). Several independent
//! banks driven by the same variant animate in lockstep because they share
//! the same default [`Motion`].
//!
//! Asking a bank for a name it never defined, or applying a variant a row
//! has no target for, is a configuration error: it fails fast instead of
//! silently holding the last value forever.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::motion::Motion;
use crate::scheduler::SchedulerHandle;
use crate::value::AnimatedValue;

/// Configuration errors raised by [`ValueBank`]
#[derive(Debug, Error, PartialEq)]
pub enum BankError {
    #[error("no animated value named `{0}` is defined in this bank")]
    UnknownValue(String),
    #[error("animated value `{name}` has no target for the applied variant")]
    MissingTarget { name: String },
}

struct Row<M> {
    value: AnimatedValue,
    targets: FxHashMap<M, f32>,
}

/// A set of named animated values with per-variant target tables
pub struct ValueBank<M> {
    handle: SchedulerHandle,
    motion: Motion,
    rows: FxHashMap<String, Row<M>>,
}

impl<M: Copy + Eq + Hash> ValueBank<M> {
    /// Create an empty bank using the shared default motion
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_motion(handle, Motion::default())
    }

    /// Create an empty bank with an explicit motion (emphasis override)
    pub fn with_motion(handle: SchedulerHandle, motion: Motion) -> Self {
        Self {
            handle,
            motion,
            rows: FxHashMap::default(),
        }
    }

    /// Define a named value resting at `initial`, with its variant targets
    ///
    /// Redefining a name replaces the previous row (and abandons its
    /// in-flight interpolation).
    pub fn define(
        &mut self,
        name: impl Into<String>,
        initial: f32,
        targets: impl IntoIterator<Item = (M, f32)>,
    ) {
        let row = Row {
            value: AnimatedValue::new(self.handle.clone(), initial, self.motion),
            targets: targets.into_iter().collect(),
        };
        self.rows.insert(name.into(), row);
    }

    /// Retarget every defined value toward its entry for `variant`
    ///
    /// Validates the whole bank before touching any value, so a
    /// misconfigured row never leaves the bank half-retargeted.
    pub fn apply(&self, variant: M) -> Result<(), BankError> {
        self.validate(variant)?;
        for row in self.rows.values() {
            row.value.set_target(row.targets[&variant]);
        }
        Ok(())
    }

    /// Snap every defined value to its entry for `variant` (no transition)
    pub fn snap(&self, variant: M) -> Result<(), BankError> {
        self.validate(variant)?;
        for row in self.rows.values() {
            row.value.jump_to(row.targets[&variant]);
        }
        Ok(())
    }

    /// Check that every row has a target for `variant`
    pub fn validate(&self, variant: M) -> Result<(), BankError> {
        for (name, row) in &self.rows {
            if !row.targets.contains_key(&variant) {
                return Err(BankError::MissingTarget { name: name.clone() });
            }
        }
        Ok(())
    }

    /// Retarget one value directly (outside the variant tables)
    pub fn retarget(&self, name: &str, target: f32) -> Result<(), BankError> {
        self.row(name)?.value.set_target(target);
        Ok(())
    }

    /// Current interpolated value of `name`
    pub fn get(&self, name: &str) -> Result<f32, BankError> {
        Ok(self.row(name)?.value.get())
    }

    /// Access the underlying [`AnimatedValue`] of `name`
    pub fn value(&self, name: &str) -> Result<&AnimatedValue, BankError> {
        Ok(&self.row(name)?.value)
    }

    /// Whether any value in the bank is still animating
    pub fn is_animating(&self) -> bool {
        self.rows.values().any(|row| row.value.is_animating())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row(&self, name: &str) -> Result<&Row<M>, BankError> {
        self.rows
            .get(name)
            .ok_or_else(|| BankError::UnknownValue(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::AnimationScheduler;

    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    enum Variant {
        Light,
        Dark,
    }

    fn bank(scheduler: &AnimationScheduler) -> ValueBank<Variant> {
        let mut bank = ValueBank::new(scheduler.handle());
        bank.define(
            "sidebar-bg",
            1.0,
            [(Variant::Light, 1.0), (Variant::Dark, 0.1)],
        );
        bank.define(
            "link-glow",
            0.0,
            [(Variant::Light, 0.2), (Variant::Dark, 0.8)],
        );
        bank
    }

    #[test]
    fn test_apply_retargets_all_rows() {
        let scheduler = AnimationScheduler::new();
        let bank = bank(&scheduler);
        bank.apply(Variant::Dark).unwrap();

        assert_eq!(bank.value("sidebar-bg").unwrap().target(), 0.1);
        assert_eq!(bank.value("link-glow").unwrap().target(), 0.8);
        assert!(bank.is_animating());
    }

    #[test]
    fn test_unknown_value_fails_fast() {
        let scheduler = AnimationScheduler::new();
        let bank = bank(&scheduler);
        assert_eq!(
            bank.get("does-not-exist"),
            Err(BankError::UnknownValue("does-not-exist".into()))
        );
        assert!(bank.retarget("does-not-exist", 1.0).is_err());
    }

    #[test]
    fn test_missing_target_leaves_bank_untouched() {
        let scheduler = AnimationScheduler::new();
        let mut bank = bank(&scheduler);
        // A row defined for only one variant
        bank.define("partial", 0.5, [(Variant::Light, 0.5)]);

        let err = bank.apply(Variant::Dark).unwrap_err();
        assert_eq!(
            err,
            BankError::MissingTarget {
                name: "partial".into()
            }
        );
        // No row was retargeted
        assert_eq!(bank.value("sidebar-bg").unwrap().target(), 1.0);
        assert!(!bank.is_animating());
    }

    #[test]
    fn test_two_banks_same_variant_agree() {
        let scheduler = AnimationScheduler::new();
        let a = bank(&scheduler);
        let b = bank(&scheduler);
        a.apply(Variant::Dark).unwrap();
        b.apply(Variant::Dark).unwrap();

        for _ in 0..30 {
            scheduler.advance(1.0 / 120.0);
            assert!(
                (a.get("link-glow").unwrap() - b.get("link-glow").unwrap()).abs() < 1e-6
            );
        }
    }
}
