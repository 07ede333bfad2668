//! Color mapping for the attractor trail and the reference axes.
//!
//! Trail colors are a pure function of distance from the origin, so the same
//! region of phase space always gets the same hue and the trajectory shows
//! smooth color bands as it moves between the two lobes.

use glam::Vec3;

/// Frequency applied to the distance before the trigonometric mapping.
const BAND_FREQUENCY: f32 = 0.1;

/// Phase offset of the blue channel.
const BLUE_PHASE: f32 = 2.0;

/// Map a distance from the origin to an RGB color.
///
/// Every channel is the absolute value of a sine or cosine, so the result lies
/// in `[0, 1]` for any finite input.
pub fn distance_color(distance: f32) -> Vec3 {
    let t = distance * BAND_FREQUENCY;
    Vec3::new(t.sin().abs(), t.cos().abs(), (t + BLUE_PHASE).sin().abs())
}

/// Color for a point in phase space.
pub fn point_color(position: Vec3) -> Vec3 {
    distance_color(position.length())
}

/// Colors of the X, Y and Z axis lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisColors {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Default for AxisColors {
    fn default() -> Self {
        Self {
            x: Vec3::new(0.6, 0.0, 0.0),
            y: Vec3::new(0.0, 0.6, 0.0),
            z: Vec3::new(0.0, 0.0, 0.6),
        }
    }
}
