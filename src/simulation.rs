use winit::event_loop::{ControlFlow, EventLoop};

use glam::{Mat4, Vec3};

use crate::config::Config;
use crate::error::RunError;
use crate::input::{Action, AppEvent, DisplayToggles, Key};
use crate::lorenz::{AttractorState, Parameters};
use crate::shader::Vertex;
use crate::trail::{axis_lines, fill_strip};
use crate::view::{initial_model, Oscillator, ViewState};
use crate::window::App;

/// Everything drawn in one frame.
pub struct Frame<'a> {
    /// Line strip vertices, oldest first.
    pub trail: &'a [Vertex],
    pub view_proj: Mat4,
    pub show_axes: bool,
}

/// All mutable state of a running visualizer, owned by the event loop.
pub struct AppState {
    pub attractor: AttractorState,
    pub parameters: Parameters,
    pub view: ViewState,
    pub toggles: DisplayToggles,
    steps_per_frame: usize,
    scale: f32,
    speed_increment: f32,
    trail: Vec<Vertex>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let model = initial_model(
            config.initial_translation,
            config.initial_rotation,
            config.initial_rotation_axis,
        );
        let oscillator = Oscillator::new(config.oscillator_step, config.oscillator_limit);
        let mut view = ViewState::new(model, config.projection, oscillator, config.rotation_speed);
        view.set_viewport(config.window_size.0, config.window_size.1);

        Self {
            attractor: config.initial_state,
            parameters: config.parameters,
            view,
            toggles: DisplayToggles::new(config.show_axes),
            steps_per_frame: config.steps_per_frame,
            scale: config.scale,
            speed_increment: config.speed_increment,
            trail: Vec::with_capacity(config.steps_per_frame),
        }
    }

    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    /// Apply an input event and report what the window must do about it.
    pub fn handle(&mut self, event: AppEvent) -> Action {
        match event {
            AppEvent::Close => Action::Exit,
            AppEvent::Resize { width, height } => {
                self.view.set_viewport(width, height);
                Action::Resize { width, height }
            }
            AppEvent::KeyDown(key) => match key {
                Key::Escape => Action::Exit,
                Key::Up => {
                    self.view.speed += self.speed_increment;
                    tracing::debug!("Rotation speed {:.2}", self.view.speed);
                    Action::None
                }
                Key::Down => {
                    self.view.speed -= self.speed_increment;
                    tracing::debug!("Rotation speed {:.2}", self.view.speed);
                    Action::None
                }
                Key::A => {
                    self.toggles.toggle_axes();
                    tracing::debug!("Axes visible: {}", self.toggles.axes_visible());
                    Action::None
                }
                Key::Space => Action::ToggleFullscreen,
                Key::Other => Action::None,
            },
        }
    }

    /// Integrate this frame's samples and return what to draw.
    ///
    /// Uses the model transform as it stands; call [`end_frame`](Self::end_frame)
    /// once the frame is presented.
    pub fn build_frame(&mut self) -> Frame<'_> {
        fill_strip(
            &mut self.attractor,
            &self.parameters,
            self.steps_per_frame,
            self.scale,
            &mut self.trail,
        );
        Frame {
            trail: &self.trail,
            view_proj: self.view.view_proj(),
            show_axes: self.toggles.axes_visible(),
        }
    }

    /// Rotate the scene and step the oscillator for the next frame.
    pub fn end_frame(&mut self) {
        self.view.advance();
    }
}

/// Builder and entry point for the visualizer window.
///
/// ```ignore
/// use lorenz_viz::Visualizer;
///
/// fn main() -> Result<(), lorenz_viz::RunError> {
///     Visualizer::new().with_axes(true).run()
/// }
/// ```
pub struct Visualizer {
    config: Config,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.config.parameters = parameters;
        self
    }

    pub fn with_initial_state(mut self, x: f32, y: f32, z: f32) -> Self {
        self.config.initial_state = AttractorState::new(x, y, z);
        self
    }

    pub fn with_steps_per_frame(mut self, steps: usize) -> Self {
        self.config.steps_per_frame = steps;
        self
    }

    pub fn with_rotation_speed(mut self, degrees: f32) -> Self {
        self.config.rotation_speed = degrees;
        self
    }

    pub fn with_axes(mut self, show: bool) -> Self {
        self.config.show_axes = show;
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.config.window_size = (width, height);
        self
    }

    pub fn with_initial_rotation(mut self, degrees: f32, axis: Vec3) -> Self {
        self.config.initial_rotation = degrees;
        self.config.initial_rotation_axis = axis;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open the window and run until it is closed.
    pub fn run(self) -> Result<(), RunError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let axes = axis_lines(self.config.axis_half_length, &self.config.axis_colors);
        let mut app = App::new(self.config, axes);
        event_loop.run_app(&mut app)?;

        app.into_result()
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
