//! Outside-interaction dismissal
//!
//! While an overlay is opening or open, its [`DismissPolicy`] sits on the
//! shared [`DismissRouter`]. The host forwards every pointer-down through
//! the router once; a watcher whose policy rejects the target is reported
//! for dismissal. The router never mutates controllers itself - the host
//! (or [`OverlayController::on_pointer_down`]) calls `close()`.
//!
//! An ignored element that is no longer attached to the document is treated
//! as *not ignored*: dismissal fails closed rather than keeping a dead
//! trigger's privileges alive.
//!
//! [`OverlayController::on_pointer_down`]: crate::controller::OverlayController::on_pointer_down

use std::sync::{Arc, Mutex};

use lumen_core::events::{event_types, Event, NodeId};
use lumen_core::hit::HitTree;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Identifier of one installed dismissal watcher
    pub struct WatcherId;
}

/// What counts as "inside" for one overlay
#[derive(Clone, Debug)]
pub struct DismissPolicy {
    /// Root of the overlay's own subtree
    overlay_root: NodeId,
    /// Elements whose subtrees never dismiss (e.g. the trigger button)
    ignored: SmallVec<[NodeId; 2]>,
}

impl DismissPolicy {
    pub fn new(overlay_root: NodeId) -> Self {
        Self {
            overlay_root,
            ignored: SmallVec::new(),
        }
    }

    /// Add an element to the allow-list
    pub fn ignore(mut self, node: NodeId) -> Self {
        self.ignored.push(node);
        self
    }

    /// Whether a pointer-down on `target` should dismiss the overlay
    pub fn should_dismiss(&self, tree: &dyn HitTree, target: NodeId) -> bool {
        if tree.is_descendant(target, self.overlay_root) {
            return false;
        }
        for &ignored in &self.ignored {
            // A detached allow-list entry no longer shields anything
            if tree.is_connected(ignored) && tree.is_descendant(target, ignored) {
                return false;
            }
        }
        true
    }
}

/// The single global pointer-down surface for all open overlays
///
/// Cheap to clone; all clones share the same watcher table.
#[derive(Clone, Default)]
pub struct DismissRouter {
    watchers: Arc<Mutex<SlotMap<WatcherId, DismissPolicy>>>,
}

impl DismissRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a watcher; active until [`remove`](Self::remove)
    pub fn install(&self, policy: DismissPolicy) -> WatcherId {
        self.watchers.lock().unwrap().insert(policy)
    }

    /// Tear a watcher down; removing twice is a no-op
    pub fn remove(&self, id: WatcherId) {
        self.watchers.lock().unwrap().remove(id);
    }

    pub fn is_installed(&self, id: WatcherId) -> bool {
        self.watchers.lock().unwrap().contains_key(id)
    }

    /// Number of active watchers; zero means the host need not forward
    /// pointer events at all
    pub fn len(&self) -> usize {
        self.watchers.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchers.lock().unwrap().is_empty()
    }

    /// Evaluate a pointer event against every watcher
    ///
    /// Returns the watchers whose overlays should close. Non-pointer-down
    /// events never dismiss.
    pub fn route(&self, tree: &dyn HitTree, event: &Event) -> SmallVec<[WatcherId; 2]> {
        if event.event_type != event_types::POINTER_DOWN {
            return SmallVec::new();
        }
        self.watchers
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, policy)| policy.should_dismiss(tree, event.target))
            .map(|(id, _)| id)
            .collect()
    }
}
