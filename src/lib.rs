//! # lorenz-viz
//!
//! Real-time 3D visualization of the Lorenz attractor.
//!
//! Every frame integrates a fixed number of Euler steps that continue the
//! running trajectory, draws them as one line strip colored by distance from
//! the origin, and rocks the scene with a slow oscillating rotation.
//!
//! ```ignore
//! fn main() -> Result<(), lorenz_viz::RunError> {
//!     lorenz_viz::Visualizer::new().run()
//! }
//! ```
//!
//! ## Controls
//!
//! | Key | Effect |
//! |-----|--------|
//! | `Esc` | Quit |
//! | `Up` / `Down` | Rotation speed ±0.1 |
//! | `A` | Toggle axes |
//! | `Space` | Toggle fullscreen |

pub mod config;
mod error;
mod gpu;
pub mod input;
pub mod lorenz;
mod shader;
mod simulation;
pub mod time;
pub mod trail;
pub mod view;
pub mod visuals;
mod window;

pub use config::Config;
pub use error::{GpuError, RunError};
pub use glam::{Mat4, Vec3};
pub use input::{Action, AppEvent, DisplayToggles, Key};
pub use lorenz::{AttractorState, Parameters};
pub use shader::Vertex;
pub use simulation::{AppState, Frame, Visualizer};
pub use trail::SamplePoint;
pub use view::{Oscillator, ViewState};
