//! Spring physics
//!
//! Damped harmonic oscillator integrated with RK4. Retargeting a spring keeps
//! its current position and velocity, so interrupted animations bend toward
//! the new target instead of jump-cutting.

/// Physical parameters of a spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Soft, slightly overdamped motion for large surfaces (theme fades)
    pub const fn gentle() -> Self {
        Self {
            stiffness: 120.0,
            damping: 22.0,
            mass: 1.0,
        }
    }

    /// Quick response for small interactive elements (highlights, hovers)
    pub const fn snappy() -> Self {
        Self {
            stiffness: 280.0,
            damping: 26.0,
            mass: 1.0,
        }
    }

    /// Near-critical damping for overlays that must settle fast
    pub const fn stiff() -> Self {
        Self {
            stiffness: 420.0,
            damping: 40.0,
            mass: 1.0,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

/// Settle thresholds: both displacement and velocity must be below these
const REST_DELTA: f32 = 0.001;
const REST_VELOCITY: f32 = 0.001;

/// A spring-driven scalar value
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
}

impl Spring {
    /// Create a spring at rest at `value`
    pub fn new(value: f32, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring, keeping current position and velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to `value` and come to rest there
    pub fn jump_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring has effectively reached its target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance the simulation by `dt` seconds (RK4)
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            // Snap the residual so readers see the exact target
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        // Clamp dt so a long frame gap cannot destabilize the integrator
        let dt = dt.min(1.0 / 30.0);

        let accel = |x: f32, v: f32| -> f32 {
            (-self.config.stiffness * (x - self.target) - self.config.damping * v)
                / self.config.mass
        };

        let (x0, v0) = (self.value, self.velocity);

        let k1x = v0;
        let k1v = accel(x0, v0);

        let k2x = v0 + k1v * dt * 0.5;
        let k2v = accel(x0 + k1x * dt * 0.5, v0 + k1v * dt * 0.5);

        let k3x = v0 + k2v * dt * 0.5;
        let k3v = accel(x0 + k2x * dt * 0.5, v0 + k2v * dt * 0.5);

        let k4x = v0 + k3v * dt;
        let k4v = accel(x0 + k3x * dt, v0 + k3v * dt);

        self.value = x0 + (k1x + 2.0 * k2x + 2.0 * k3x + k4x) * dt / 6.0;
        self.velocity = v0 + (k1v + 2.0 * k2v + 2.0 * k3v + k4v) * dt / 6.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring) -> u32 {
        let mut frames = 0;
        while !spring.is_settled() {
            spring.step(1.0 / 120.0);
            frames += 1;
            assert!(frames < 10_000, "spring never settled");
        }
        frames
    }

    #[test]
    fn test_converges_to_target() {
        let mut s = Spring::new(0.0, SpringConfig::gentle());
        s.set_target(1.0);
        settle(&mut s);
        assert!((s.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_retarget_keeps_position_and_velocity() {
        let mut s = Spring::new(0.0, SpringConfig::snappy());
        s.set_target(1.0);
        for _ in 0..10 {
            s.step(1.0 / 120.0);
        }
        let (mid_value, mid_velocity) = (s.value(), s.velocity());
        assert!(mid_value > 0.0 && mid_value < 1.0);
        assert!(mid_velocity > 0.0);

        // Reverse mid-flight: no jump-cut
        s.set_target(0.0);
        assert_eq!(s.value(), mid_value);
        assert_eq!(s.velocity(), mid_velocity);

        settle(&mut s);
        assert!(s.value().abs() < 0.01);
    }

    #[test]
    fn test_jump_to_is_an_explicit_cut() {
        let mut s = Spring::new(0.0, SpringConfig::gentle());
        s.set_target(1.0);
        s.step(1.0 / 120.0);
        s.jump_to(5.0);
        assert_eq!(s.value(), 5.0);
        assert!(s.is_settled());
    }

    #[test]
    fn test_settled_spring_holds_exact_target() {
        let mut s = Spring::new(0.0, SpringConfig::stiff());
        s.set_target(1.0);
        settle(&mut s);
        s.step(1.0 / 120.0);
        assert_eq!(s.value(), 1.0);
        assert_eq!(s.velocity(), 0.0);
    }
}
