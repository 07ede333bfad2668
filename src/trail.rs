//! Assembly of per-frame line geometry.
//!
//! Nothing here is retained between frames: the visible trail is simply the
//! last window of integration steps, drawn as one connected line strip.

use glam::Vec3;

use crate::lorenz::{AttractorState, Parameters};
use crate::shader::Vertex;
use crate::visuals::{distance_color, AxisColors};

/// One integrated sample ready for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub position: Vec3,
    pub color: Vec3,
}

impl SamplePoint {
    /// Place a phase-space state in the scene.
    ///
    /// The z axis is mapped to `1 - z * scale` while x and y use `+coord * scale`;
    /// the asymmetry frames the attractor in the default view and must not be
    /// normalized.
    pub fn from_state(state: &AttractorState, scale: f32) -> Self {
        Self {
            position: Vec3::new(state.x * scale, state.y * scale, 1.0 - state.z * scale),
            color: distance_color(state.distance()),
        }
    }
}

impl From<SamplePoint> for Vertex {
    fn from(p: SamplePoint) -> Self {
        Vertex::new(p.position, p.color)
    }
}

/// Integrate `steps` new samples into `out`, replacing its contents.
///
/// `state` carries over, so successive calls continue the same trajectory.
pub fn fill_strip(
    state: &mut AttractorState,
    params: &Parameters,
    steps: usize,
    scale: f32,
    out: &mut Vec<Vertex>,
) {
    out.clear();
    out.reserve(steps);
    out.extend(
        state
            .integrate(params, steps)
            .map(|s| Vertex::from(SamplePoint::from_state(&s, scale))),
    );
}

/// Three independent segments along X, Y and Z, each spanning `-half_length..half_length`.
pub fn axis_lines(half_length: f32, colors: &AxisColors) -> [Vertex; 6] {
    let h = half_length;
    [
        Vertex::new(Vec3::new(-h, 0.0, 0.0), colors.x),
        Vertex::new(Vec3::new(h, 0.0, 0.0), colors.x),
        Vertex::new(Vec3::new(0.0, -h, 0.0), colors.y),
        Vertex::new(Vec3::new(0.0, h, 0.0), colors.y),
        Vertex::new(Vec3::new(0.0, 0.0, -h), colors.z),
        Vertex::new(Vec3::new(0.0, 0.0, h), colors.z),
    ]
}
