//! Error types for startup failures.
//!
//! Once the window and GPU are up, nothing in the frame loop is fallible
//! except presentation, which is handled in place.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Error, Debug)]
pub enum GpuError {
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found ({0}). Ensure your system has a GPU with Vulkan/Metal/DX12/GL support.")]
    NoAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,
}

/// Errors that end a visualizer run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}
