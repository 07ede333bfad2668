//! Compile-time constants of the visualizer, gathered in one place.
//!
//! Nothing here is read from the environment or from disk. [`Config::default`]
//! reproduces the classic demo; the builder methods on
//! [`Visualizer`](crate::Visualizer) override individual values from code.

use std::time::Duration;

use glam::Vec3;

use crate::lorenz::{AttractorState, Parameters};
use crate::view::Projection;
use crate::visuals::AxisColors;

/// Complete configuration of a visualizer run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lorenz system parameters and integration step.
    pub parameters: Parameters,
    /// Where the trajectory starts.
    pub initial_state: AttractorState,
    /// Euler steps integrated (and vertices drawn) per frame.
    pub steps_per_frame: usize,
    /// Phase space to scene scale factor.
    pub scale: f32,

    /// Degrees per rotation per frame at startup.
    pub rotation_speed: f32,
    /// Change applied to the rotation speed by the arrow keys.
    pub speed_increment: f32,
    /// Oscillator phase increment per frame.
    pub oscillator_step: f32,
    /// Oscillator turnaround threshold.
    pub oscillator_limit: f32,

    pub projection: Projection,
    /// Model translation applied before anything else.
    pub initial_translation: Vec3,
    /// Initial model rotation in degrees.
    pub initial_rotation: f32,
    /// Axis of the initial model rotation.
    pub initial_rotation_axis: Vec3,

    /// Half-length of each axis line.
    pub axis_half_length: f32,
    pub axis_colors: AxisColors,
    /// Whether the axes are drawn at startup.
    pub show_axes: bool,

    pub window_title: String,
    /// Initial inner size of the window in logical pixels.
    pub window_size: (u32, u32),
    /// Pause after presenting each frame.
    pub frame_sleep: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parameters: Parameters::CLASSIC,
            initial_state: AttractorState::default(),
            steps_per_frame: 10_000,
            scale: 0.05,

            rotation_speed: 0.4,
            speed_increment: 0.1,
            oscillator_step: 0.001,
            oscillator_limit: 45.0,

            projection: Projection::default(),
            initial_translation: Vec3::new(0.0, -0.1, -6.0),
            initial_rotation: 90.0,
            initial_rotation_axis: Vec3::ONE,

            axis_half_length: 3.0,
            axis_colors: AxisColors::default(),
            show_axes: false,

            window_title: "Lorenz Attractor".to_string(),
            window_size: (800, 600),
            frame_sleep: Duration::from_millis(4),
        }
    }
}
