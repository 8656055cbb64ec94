//! Lumen Overlay Lifecycle
//!
//! Transient floating UI (dropdowns, modals, the mobile drawer) shares one
//! controller: a cyclic `Closed -> Opening -> Open -> Closing -> Closed`
//! phase machine whose transitions are driven by the overlay's own animated
//! value reaching its resting state, never by a guessed wall-clock delay.
//!
//! - `open()`/`close()` are idempotent; calling `close()` mid-open redirects
//!   the in-flight animation toward closed with no flash of the open state
//! - Side effects tied to "fully open" / "fully closed" fire exactly once
//!   per transition into that phase
//! - The drawer variant holds a shared [`ScrollLock`] that is engaged on
//!   opening and released only when the animation settles closed
//! - While an overlay is opening or open, its dismissal policy is installed
//!   on the [`DismissRouter`]; a pointer-down outside the overlay's subtree
//!   and its allow-list closes it. Teardown happens on reaching closed, or
//!   on drop if the overlay unmounts mid-animation.

pub mod controller;
pub mod dismiss;
pub mod scroll_lock;

pub use controller::{OverlayController, OverlayPhase};
pub use dismiss::{DismissPolicy, DismissRouter, WatcherId};
pub use scroll_lock::ScrollLock;
