//! Contract between the runtime loop and the application.
//!
//! The runtime calls [`App`] once per window event and once per frame; the
//! app receives a [`FrameCtx`] with input, timing and a way to present.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
