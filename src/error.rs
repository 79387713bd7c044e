//! Startup errors
//!
//! The simulation itself cannot fail. Everything here is an unrecoverable
//! precondition checked once while wiring up the page and GPU.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{0} is not a canvas")]
    NotACanvas(&'static str),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}
