//! Lumen Theme System
//!
//! A single light/dark theme store that the whole page derives its animated
//! colors from.
//!
//! # Overview
//!
//! - **One resolved mode**: the store always holds a concrete `light` or
//!   `dark` mode plus the *origin* of that choice (explicit or inherited
//!   from the OS) — "system" is never a third mode
//! - **Single writer**: [`ThemeStore::set_theme`] is the only mutation path;
//!   everything else reads
//! - **Persistence**: explicit choices go to durable storage through a
//!   [`PreferenceStore`]; system-derived modes are never persisted
//! - **OS signal**: while the origin is `System`, the store follows
//!   preference-change notifications from a [`SystemScheme`]
//! - **Animated transitions**: with a scheduler attached, mode changes fade
//!   color tokens instead of swapping them
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use lumen_theme::{
//!     MemoryPreferenceStore, SystemSchemeRelay, ThemeMode, ThemePalette, ThemeSetting,
//!     ThemeStore,
//! };
//!
//! let system = Arc::new(SystemSchemeRelay::new(ThemeMode::Light));
//! let store = ThemeStore::new(
//!     ThemePalette::default(),
//!     Box::new(MemoryPreferenceStore::new()),
//!     system,
//! );
//!
//! store.set_theme(ThemeSetting::Dark);
//! assert_eq!(store.mode(), ThemeMode::Dark);
//! ```

pub mod bank;
pub mod palette;
pub mod prefs;
pub mod store;
pub mod system;

pub use bank::{ThemeBank, ThemeBankBuilder};
pub use palette::{ColorToken, ColorTokens, ThemePalette};
pub use prefs::{MemoryPreferenceStore, PreferenceStore};
pub use store::{ResolvedTheme, ThemeMode, ThemeOrigin, ThemeSetting, ThemeStore};
pub use system::{SubscriptionId, SystemScheme, SystemSchemeRelay};
