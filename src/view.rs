//! View transform: projection, accumulated model rotation and the oscillator
//! that rocks the scene back and forth.

use glam::{Mat4, Vec3};

/// Rotation axes shorter than this leave the transform untouched.
const MIN_AXIS_LENGTH: f32 = 1.0e-4;

/// Perspective projection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Aspect ratio for a surface size; a zero height counts as one pixel.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Rotation by `degrees` about `axis`, post-multiplied onto the current transform
/// in the fixed-function style. The axis is normalized; a degenerate axis is a no-op.
pub fn rotate(model: Mat4, degrees: f32, axis: Vec3) -> Mat4 {
    if axis.length() <= MIN_AXIS_LENGTH {
        return model;
    }
    model * Mat4::from_axis_angle(axis.normalize(), degrees.to_radians())
}

/// Triangle-wave oscillator.
///
/// The phase ramps by `step` each frame in the current direction, and the
/// direction flips once the phase passes `±limit`. It free-runs forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Accumulated phase.
    pub phase: f32,
    /// Current direction, always `1.0` or `-1.0`.
    pub direction: f32,
    pub step: f32,
    pub limit: f32,
}

impl Oscillator {
    pub fn new(step: f32, limit: f32) -> Self {
        Self {
            phase: 0.0,
            direction: 1.0,
            step,
            limit,
        }
    }

    pub fn advance(&mut self) {
        self.phase += self.direction * self.step;
        if self.phase > self.limit {
            self.direction = -1.0;
        }
        if self.phase < -self.limit {
            self.direction = 1.0;
        }
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(0.001, 45.0)
    }
}

/// Everything that determines where the scene ends up on screen.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Accumulated model transform, persistent across frames.
    pub model: Mat4,
    pub projection: Projection,
    pub aspect: f32,
    pub oscillator: Oscillator,
    /// Degrees applied per rotation per frame. Unbounded.
    pub speed: f32,
}

impl ViewState {
    pub fn new(initial_model: Mat4, projection: Projection, oscillator: Oscillator, speed: f32) -> Self {
        Self {
            model: initial_model,
            projection,
            aspect: 1.0,
            oscillator,
            speed,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection.matrix(self.aspect) * self.model
    }

    /// Apply this frame's three incremental rotations, then step the oscillator.
    ///
    /// `sin(a)` and `cos(a)` are used as axis components, not angles.
    pub fn advance(&mut self) {
        let (s, c) = self.oscillator.phase.sin_cos();
        let mut model = self.model;
        model = rotate(model, self.speed, Vec3::new(s, 0.0, 0.0));
        model = rotate(model, self.speed, Vec3::new(0.0, c, 0.0));
        model = rotate(model, self.speed, Vec3::new(0.0, 0.0, 1.0 - s));
        self.model = model;
        self.oscillator.advance();
    }
}

/// Starting model transform: translate, then rotate `degrees` about `axis`.
pub fn initial_model(translation: Vec3, degrees: f32, axis: Vec3) -> Mat4 {
    rotate(Mat4::from_translation(translation), degrees, axis)
}
