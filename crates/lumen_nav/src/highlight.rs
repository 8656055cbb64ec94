//! Highlight synchronization set
//!
//! Items are keyed by stable id, not position, so a menu rebuilding its
//! entries never confuses "third item" with "the quickstart link". Each
//! entry drives two animated values: the committed active highlight and the
//! hover preview. Active always wins: a hovered entry that is also active
//! shows the active style only.
//!
//! Activating an id that has no registered entry is a transient state during
//! route changes, not an error; the activation is parked and applied the
//! moment a matching entry registers.

use lumen_animation::{AnimatedValue, Motion, SchedulerHandle};

/// Observed state of one entry, in registration order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightEntry {
    pub id: String,
    pub is_active: bool,
    pub is_hovered: bool,
}

struct Entry {
    id: String,
    active: bool,
    hovered: bool,
    /// Committed highlight, 0.0 resting to 1.0 active
    active_t: AnimatedValue,
    /// Hover preview, gated off while the entry is active
    hover_t: AnimatedValue,
}

impl Entry {
    fn retarget(&self) {
        self.active_t.set_target(if self.active { 1.0 } else { 0.0 });
        let hover_visible = self.hovered && !self.active;
        self.hover_t.set_target(if hover_visible { 1.0 } else { 0.0 });
    }
}

/// One menu's worth of synchronized highlight state
pub struct HighlightSet {
    handle: SchedulerHandle,
    motion: Motion,
    entries: Vec<Entry>,
    /// Activation waiting for its entry to register
    pending_active: Option<String>,
}

impl HighlightSet {
    /// Create an empty set with the quick highlight motion
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_motion(handle, Motion::snappy())
    }

    pub fn with_motion(handle: SchedulerHandle, motion: Motion) -> Self {
        Self {
            handle,
            motion,
            entries: Vec::new(),
            pending_active: None,
        }
    }

    /// Register an item as it mounts; re-registering an id is a no-op
    ///
    /// A parked activation for this id is applied immediately, converging
    /// the set after a route change that outran the menu build.
    pub fn register(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.entries.iter().any(|e| e.id == id) {
            return;
        }
        let matches_pending = self.pending_active.as_deref() == Some(id.as_str());
        self.entries.push(Entry {
            active: false,
            hovered: false,
            active_t: AnimatedValue::new(self.handle.clone(), 0.0, self.motion),
            hover_t: AnimatedValue::new(self.handle.clone(), 0.0, self.motion),
            id,
        });

        if matches_pending {
            let id = self.pending_active.take().unwrap();
            tracing::debug!(%id, "parked activation applied on register");
            self.activate(&id);
        }
    }

    /// Remove an item as it unmounts; its in-flight highlights are abandoned
    ///
    /// Deregistering the active entry re-parks the activation so a remount
    /// of the same id converges again.
    pub fn deregister(&mut self, id: &str) {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return;
        };
        let entry = self.entries.remove(index);
        if entry.active {
            self.pending_active = Some(entry.id);
        }
    }

    /// Mark the entry matching `id` as the single active one
    ///
    /// Applied atomically across the whole set: no observation point can see
    /// two active entries. An unknown id clears the current active entry and
    /// parks the activation until a matching item registers.
    pub fn activate(&mut self, id: &str) {
        self.pending_active = None;
        let mut found = false;
        for entry in &mut self.entries {
            entry.active = entry.id == id;
            found |= entry.active;
            entry.retarget();
        }
        if !found {
            tracing::debug!(%id, "activation parked; no matching entry yet");
            self.pending_active = Some(id.to_string());
        }
    }

    /// Show the hover preview on one entry (clearing any other preview)
    ///
    /// Never touches `active` state; hovering an unknown id just clears the
    /// current preview.
    pub fn hover(&mut self, id: &str) {
        for entry in &mut self.entries {
            entry.hovered = entry.id == id;
            entry.retarget();
        }
    }

    /// Clear the hover preview of `id` if it is showing
    pub fn unhover(&mut self, id: &str) {
        for entry in &mut self.entries {
            if entry.id == id && entry.hovered {
                entry.hovered = false;
                entry.retarget();
            }
        }
    }

    // ========== Reads ==========

    /// The id of the single active entry, if any
    pub fn active_id(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.active)
            .map(|e| e.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.active && e.id == id)
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.hovered && e.id == id)
    }

    /// Current committed highlight intensity for `id` (0.0..=1.0)
    pub fn active_value(&self, id: &str) -> Option<f32> {
        self.entry(id).map(|e| e.active_t.get())
    }

    /// Current hover preview intensity for `id` (0.0..=1.0)
    pub fn hover_value(&self, id: &str) -> Option<f32> {
        self.entry(id).map(|e| e.hover_t.get())
    }

    /// Observed entries in registration order
    pub fn snapshot(&self) -> Vec<HighlightEntry> {
        self.entries
            .iter()
            .map(|e| HighlightEntry {
                id: e.id.clone(),
                is_active: e.active,
                is_hovered: e.hovered,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}
