//! Lumen Navigation Highlights
//!
//! Every menu (desktop sidebar, mobile sidebar, each dropdown) owns one
//! [`HighlightSet`]: an ordered collection of navigable items where exactly
//! one item may be *active* (matching the current view) and at most one may
//! show a non-committal *hover* preview. Menus never share a set, so there
//! is no global index space to coordinate.
//!
//! # Example
//!
//! ```rust
//! use lumen_animation::AnimationScheduler;
//! use lumen_nav::HighlightSet;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut sidebar = HighlightSet::new(scheduler.handle());
//! sidebar.register("overview");
//! sidebar.register("install");
//!
//! sidebar.activate("install");
//! assert_eq!(sidebar.active_id(), Some("install"));
//!
//! sidebar.hover("overview");
//! assert!(sidebar.is_hovered("overview"));
//! assert_eq!(sidebar.active_id(), Some("install"));
//! ```

pub mod highlight;

pub use highlight::{HighlightEntry, HighlightSet};
