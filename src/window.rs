use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowId},
};

use crate::config::Config;
use crate::error::RunError;
use crate::gpu::GpuState;
use crate::input::{Action, AppEvent};
use crate::shader::Vertex;
use crate::simulation::AppState;
use crate::time::FrameClock;

/// Windowed geometry remembered while fullscreen.
#[derive(Debug, Clone, Copy)]
struct Placement {
    position: Option<PhysicalPosition<i32>>,
    size: PhysicalSize<u32>,
}

/// Fullscreen flag plus the placement to restore when leaving it.
#[derive(Debug, Default)]
struct FullscreenState {
    active: bool,
    saved: Option<Placement>,
}

impl FullscreenState {
    fn toggle(&mut self, window: &Window) {
        if !self.active {
            self.saved = Some(Placement {
                position: window.outer_position().ok(),
                size: window.inner_size(),
            });
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            self.active = true;
        } else {
            window.set_fullscreen(None);
            if let Some(placement) = self.saved.take() {
                if let Some(position) = placement.position {
                    window.set_outer_position(position);
                }
                let _ = window.request_inner_size(placement.size);
            }
            self.active = false;
        }
        tracing::debug!("Fullscreen: {}", self.active);
    }
}

pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    state: AppState,
    config: Config,
    axes: [Vertex; 6],
    clock: FrameClock,
    fullscreen: FullscreenState,
    error: Option<RunError>,
}

impl App {
    pub fn new(config: Config, axes: [Vertex; 6]) -> Self {
        Self {
            window: None,
            gpu_state: None,
            state: AppState::new(&config),
            clock: FrameClock::new(config.frame_sleep),
            config,
            axes,
            fullscreen: FullscreenState::default(),
            error: None,
        }
    }

    /// Startup failure recorded while the loop was running, if any.
    pub fn into_result(self) -> Result<(), RunError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(width, height))
            .with_position(PhysicalPosition::new(0, 0));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();
        self.state.view.set_viewport(size.width, size.height);

        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            self.state.steps_per_frame(),
            &self.axes,
        ))?;

        tracing::info!("Window ready at {}x{}", size.width, size.height);
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        let frame = self.state.build_frame();
        match gpu_state.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu_state.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => tracing::warn!("Render error: {:?}", e),
        }
        self.state.end_frame();

        if let Some(fps) = self.clock.tick() {
            tracing::debug!("{:.1} fps (frame {})", fps, self.clock.frame());
        }
        self.clock.pause();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            self.redraw(event_loop);
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            return;
        }

        let Some(app_event) = AppEvent::from_window_event(&event) else {
            return;
        };

        match self.state.handle(app_event) {
            Action::None => {}
            Action::Exit => event_loop.exit(),
            Action::Resize { width, height } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(PhysicalSize::new(width, height));
                }
            }
            Action::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    self.fullscreen.toggle(window);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
