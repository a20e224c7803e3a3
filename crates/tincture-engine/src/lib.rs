//! Tincture engine crate.
//!
//! Owns the platform, CPU raster and GPU presentation pieces used by the
//! picker UI. Everything the screen draws goes into a `tiny_skia::Pixmap`
//! which the runtime uploads and presents once per frame.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod canvas;
pub mod text;
