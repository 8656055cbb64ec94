//! Interpolation models

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// How an [`crate::AnimatedValue`] moves toward its target
///
/// Independent values created with the same `Motion` animate in lockstep;
/// the default is the shared transition every consumer gets unless it
/// overrides for emphasis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Physical spring (velocity-preserving across retargets)
    Spring(SpringConfig),
    /// Fixed-duration tween with an easing curve
    Tween { duration_ms: u32, easing: Easing },
}

impl Motion {
    /// Quick spring for interactive highlights
    pub const fn snappy() -> Self {
        Motion::Spring(SpringConfig::snappy())
    }

    /// Timed fade used for cross-surface transitions
    pub const fn tween(duration_ms: u32, easing: Easing) -> Self {
        Motion::Tween {
            duration_ms,
            easing,
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Spring(SpringConfig::gentle())
    }
}
