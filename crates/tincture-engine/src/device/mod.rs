//! GPU device and surface management.
//!
//! The GPU's only job is presentation: frames are rasterized on the CPU and
//! [`Gpu::present`] uploads the finished pixmap and blits it to the surface.

mod blit;
mod gpu;
mod surface;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
