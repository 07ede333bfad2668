//! Lorenz system and its fixed-step integrator.
//!
//! The trajectory is advanced with explicit (forward) Euler steps. There is no
//! adaptive stepping or error control: the state simply carries over from one
//! call to the next for as long as the program runs.

use glam::Vec3;

/// Immutable system parameters and integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Prandtl number.
    pub sigma: f32,
    /// Rayleigh number.
    pub rho: f32,
    /// Geometric factor.
    pub beta: f32,
    /// Fixed integration step.
    pub dt: f32,
}

impl Parameters {
    /// The classic chaotic configuration: sigma = 10, rho = 28, beta = 8/3, dt = 0.01.
    pub const CLASSIC: Self = Self {
        sigma: 10.0,
        rho: 28.0,
        beta: 8.0 / 3.0,
        dt: 0.01,
    };
}

impl Default for Parameters {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Current position in phase space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractorState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AttractorState {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Advance one Euler step. All derivatives are taken from the pre-step state.
    #[inline]
    pub fn step(&mut self, params: &Parameters) {
        let dx = params.sigma * (self.y - self.x) * params.dt;
        let dy = (self.x * (params.rho - self.z) - self.y) * params.dt;
        let dz = (self.x * self.y - params.beta * self.z) * params.dt;
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Advance `steps` Euler steps, yielding the state after each one.
    pub fn integrate<'a>(
        &'a mut self,
        params: &'a Parameters,
        steps: usize,
    ) -> impl Iterator<Item = AttractorState> + 'a {
        (0..steps).map(move |_| {
            self.step(params);
            *self
        })
    }

    /// Euclidean distance from the origin.
    pub fn distance(&self) -> f32 {
        self.as_vec3().length()
    }

    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl Default for AttractorState {
    fn default() -> Self {
        Self::new(0.1, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_single_step_from_default() {
        let mut state = AttractorState::default();
        state.step(&Parameters::CLASSIC);

        assert!(approx(state.x, 0.09), "x = {}", state.x);
        assert!(approx(state.y, 0.028), "y = {}", state.y);
        assert!(approx(state.z, 0.0), "z = {}", state.z);
    }

    #[test]
    fn test_derivatives_use_pre_step_state() {
        // With x updated first, dy would see x = 0.09 instead of 0.1.
        let mut state = AttractorState::new(0.1, 0.0, 0.0);
        state.step(&Parameters::CLASSIC);
        assert!(approx(state.y, 0.1 * 28.0 * 0.01));
    }

    #[test]
    fn test_origin_is_fixed_point() {
        let mut state = AttractorState::new(0.0, 0.0, 0.0);
        for _ in 0..1000 {
            state.step(&Parameters::CLASSIC);
        }
        assert_eq!(state, AttractorState::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_integrate_matches_repeated_step() {
        let params = Parameters::CLASSIC;
        let mut a = AttractorState::default();
        let mut b = AttractorState::default();

        let samples: Vec<_> = a.integrate(&params, 500).collect();
        assert_eq!(samples.len(), 500);

        for sample in &samples {
            b.step(&params);
            assert_eq!(*sample, b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_integrate_is_deterministic() {
        let params = Parameters::CLASSIC;
        let mut a = AttractorState::new(1.0, 1.0, 1.0);
        let mut b = AttractorState::new(1.0, 1.0, 1.0);

        let first: Vec<_> = a.integrate(&params, 10_000).collect();
        let second: Vec<_> = b.integrate(&params, 10_000).collect();

        assert_eq!(first, second);
        assert_eq!(a, b);
    }

    #[test]
    fn test_trajectory_stays_on_attractor() {
        let params = Parameters::CLASSIC;
        let mut state = AttractorState::default();
        for sample in state.integrate(&params, 50_000) {
            assert!(sample.x.is_finite() && sample.y.is_finite() && sample.z.is_finite());
            assert!(sample.distance() < 100.0);
        }
    }
}
