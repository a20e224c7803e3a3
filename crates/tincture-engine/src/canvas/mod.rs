//! Immediate-mode 2D drawing surface.
//!
//! [`Canvas2d`] is the whole contract the pen tool relies on: stroke style,
//! path building, stroking and clearing. [`PixmapCanvas`] implements it on a
//! CPU pixel buffer.

mod pixmap;

use std::fmt;

use crate::coords::{Rect, Vec2};
use crate::paint::HexColor;

pub use pixmap::PixmapCanvas;

/// Shape drawn at the open ends of stroked lines.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub(crate) fn to_skia(self) -> tiny_skia::LineCap {
        match self {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        }
    }
}

/// Complete stroke state of a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub color: HexColor,
}

impl StrokeStyle {
    /// Writes every field into `canvas`.
    pub fn apply<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        canvas.set_line_width(self.width);
        canvas.set_line_cap(self.cap);
        canvas.set_stroke_color(self.color);
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 1.0, cap: LineCap::Butt, color: HexColor::BLACK }
    }
}

/// The drawing primitives of an HTML-style 2D context.
///
/// Points are in surface-local coordinates. Acquiring the surface is the
/// implementor's constructor.
pub trait Canvas2d {
    /// Surface size in logical pixels.
    fn size(&self) -> Vec2;

    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_stroke_color(&mut self, color: HexColor);

    /// Discards the open path.
    fn begin_path(&mut self);
    /// Starts a new sub-path at `p`.
    fn move_to(&mut self, p: Vec2);
    /// Extends the current sub-path with a straight segment to `p`.
    fn line_to(&mut self, p: Vec2);
    /// Strokes the whole open path with the current style.
    fn stroke(&mut self);
    /// Closes the current sub-path back to its first point.
    fn close_path(&mut self);
    /// Makes every pixel under `rect` fully transparent.
    fn clear_rect(&mut self, rect: Rect);
}

/// Error returned when acquiring a drawing surface fails.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// Width or height rounded to zero pixels.
    ZeroSize { width: f32, height: f32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::ZeroSize { width, height } => {
                write!(f, "cannot create a {width}x{height} drawing surface")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
