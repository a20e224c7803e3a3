use tiny_skia::Pixmap;
use winit::window::{CursorIcon, Window, WindowId};

use crate::coords::Vec2;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Handle to the window being drawn.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Window size in logical pixels.
    pub fn logical_size(&self) -> Vec2 {
        let logical: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        Vec2::new(logical.width as f32, logical.height as f32)
    }

    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    /// Sets the cursor shape; call each frame to keep it current.
    pub fn set_cursor(&self, cursor: CursorIcon) {
        self.window.set_cursor(cursor);
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// `'a` is the callback borrow, `'w` the window borrow carried by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Physical size the presented pixmap should have.
    pub fn surface_size(&self) -> (u32, u32) {
        let size = self.gpu.size();
        (size.width, size.height)
    }

    /// Puts `pixmap` on screen.
    ///
    /// Surface errors are handled here: lost surfaces are reconfigured and the
    /// frame skipped, and only a fatal error asks the runtime to exit.
    pub fn present(&mut self, pixmap: &Pixmap) -> AppControl {
        self.window.window.pre_present_notify();
        match self.gpu.present(pixmap) {
            Ok(()) => AppControl::Continue,
            Err(err) => match self.gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => AppControl::Exit,
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                    AppControl::Continue
                }
            },
        }
    }
}
