//! Lumen Animation System
//!
//! Spring physics, tweens, and the animated value bank that keeps many
//! independently-owned values tracking the same discrete state.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: Timed transitions with easing functions
//! - **Retarget, never restart**: interrupting an animation keeps the current
//!   position (and velocity, for springs) and heads for the new target
//! - **Leak-free**: an [`AnimatedValue`] removes itself from the scheduler
//!   when dropped, abandoning any in-flight interpolation
//!
//! # Example
//!
//! ```rust
//! use lumen_animation::{AnimatedValue, AnimationScheduler, Motion};
//!
//! let scheduler = AnimationScheduler::new();
//! let opacity = AnimatedValue::new(scheduler.handle(), 0.0, Motion::default());
//! opacity.set_target(1.0);
//!
//! scheduler.advance(0.016);
//! assert!(opacity.get() > 0.0);
//! ```

pub mod bank;
pub mod easing;
pub mod motion;
pub mod scheduler;
pub mod spring;
pub mod value;

pub use bank::{BankError, ValueBank};
pub use easing::Easing;
pub use motion::Motion;
pub use scheduler::{AnimationScheduler, DriveId, SchedulerHandle};
pub use spring::{Spring, SpringConfig};
pub use value::AnimatedValue;
