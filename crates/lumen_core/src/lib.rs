//! Lumen Core
//!
//! Foundational primitives for the Lumen navigation & theme engine:
//!
//! - **Colors**: linear RGBA with hex construction and interpolation
//! - **Pointer Events**: the minimal event model hosts feed into the engine
//! - **Hit Tree**: containment and connectedness queries over host nodes
//!
//! # Example
//!
//! ```rust
//! use lumen_core::Color;
//!
//! let brand = Color::from_hex(0x1E66F5);
//! let faded = brand.with_alpha(0.4);
//! let mid = Color::lerp(&brand, &Color::WHITE, 0.5);
//! assert!(mid.r > brand.r);
//! assert_eq!(faded.a, 0.4);
//! ```

pub mod color;
pub mod events;
pub mod hit;

pub use color::Color;
pub use events::{Event, EventData, EventType, NodeId};
pub use hit::{HitTree, ParentMapHitTree};
