use tiny_skia::{FillRule, FilterQuality, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::{HexColor, Paint};
use tincture_engine::text::{FontId, FontSystem, TextRasterizer, TextRun};

use crate::theme;

/// Outline drawn around a filled shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: HexColor,
}

impl Border {
    pub const fn new(width: f32, color: HexColor) -> Self {
        Self { width, color }
    }
}

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Takes logical coordinates and rasterizes at `scale` into the frame pixmap.
/// Also carries the pointer state so widgets can pick hover and pressed
/// visuals while painting.
pub struct Painter<'a> {
    pixmap: &'a mut Pixmap,
    fonts: &'a FontSystem,
    raster: &'a mut TextRasterizer,
    font: Option<FontId>,
    transform: Transform,
    /// Physical pixels per logical pixel.
    pub scale: f32,
    pub mouse_pos: Option<Vec2>,
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(
        pixmap: &'a mut Pixmap,
        fonts: &'a FontSystem,
        raster: &'a mut TextRasterizer,
        font: Option<FontId>,
        scale: f32,
    ) -> Self {
        Self {
            pixmap,
            fonts,
            raster,
            font,
            transform: Transform::from_scale(scale, scale),
            scale,
            mouse_pos: None,
            mouse_pressed: false,
        }
    }

    pub fn with_pointer(mut self, pos: Option<Vec2>, pressed: bool) -> Self {
        self.mouse_pos = pos;
        self.mouse_pressed = pressed;
        self
    }

    // ── input queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse_pos.is_some_and(|p| rect.contains(p))
    }

    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && self.is_hovered(rect)
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Logical size of `text` in the body font. Zero width without a font.
    pub fn measure_text(&self, text: &str, size: f32) -> Vec2 {
        match self.font {
            Some(font) => self.fonts.measure_text(text, font, size, None),
            None => Vec2::new(0.0, size * 1.2),
        }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Fills the whole frame.
    pub fn clear(&mut self, color: HexColor) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let Some(r) = rect.to_skia() else { return };
        let mut sk_paint = paint.into().to_skia(rect);
        sk_paint.anti_alias = false;
        self.pixmap.fill_rect(r, &sk_paint, self.transform, None);
    }

    /// Rounded rectangle; `radius = 0.0` gives sharp corners.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let Some(path) = rounded_rect_path(rect, radius) else { return };
        let paint = paint.into().to_skia(rect);
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, self.transform, None);
        if let Some(border) = border {
            self.stroke_path(&path, border);
        }
    }

    pub fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else { return };
        let bounds = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        let paint = paint.into().to_skia(bounds);
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, self.transform, None);
        if let Some(border) = border {
            self.stroke_path(&path, border);
        }
    }

    /// Filled triangle, used for dropdown carets.
    pub fn fill_triangle(&mut self, points: [Vec2; 3], color: HexColor) {
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x, points[0].y);
        pb.line_to(points[1].x, points[1].y);
        pb.line_to(points[2].x, points[2].y);
        pb.close();
        let Some(path) = pb.finish() else { return };
        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;
        paint.set_color(color.to_skia());
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, self.transform, None);
    }

    /// Outline only.
    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, border: Border) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            self.stroke_path(&path, border);
        }
    }

    fn stroke_path(&mut self, path: &Path, border: Border) {
        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;
        paint.set_color(border.color.to_skia());
        let stroke = Stroke { width: border.width, ..Stroke::default() };
        self.pixmap.stroke_path(path, &paint, &stroke, self.transform, None);
    }

    /// Text with its layout box at `origin`. No-op without a font.
    pub fn text(&mut self, text: &str, size: f32, color: HexColor, origin: Vec2, max_width: Option<f32>) {
        let Some(font) = self.font else { return };
        let run = TextRun { text, font, size, color, origin, max_width };
        self.raster.draw(self.pixmap, self.fonts, &run, self.scale, None);
    }

    /// Single line clipped to `rect`, vertically centered, left aligned with
    /// `pad` inset.
    pub fn text_in(&mut self, text: &str, size: f32, color: HexColor, rect: Rect, pad: f32) {
        let Some(font) = self.font else { return };
        let m = self.measure_text(text, size);
        let origin = Vec2::new(rect.x() + pad, rect.y() + (rect.height() - m.y) * 0.5);
        let run = TextRun { text, font, size, color, origin, max_width: None };
        self.raster.draw(self.pixmap, self.fonts, &run, self.scale, Some(rect.inset(pad.min(2.0))));
    }

    /// Single line centered in `rect`.
    pub fn text_centered(&mut self, text: &str, size: f32, color: HexColor, rect: Rect) {
        let m = self.measure_text(text, size);
        let origin = Vec2::new(
            rect.x() + (rect.width() - m.x) * 0.5,
            rect.y() + (rect.height() - m.y) * 0.5,
        );
        self.text(text, size, color, origin, None);
    }

    /// Hover hint below-right of the pointer, kept inside the frame.
    /// No-op when the pointer is outside the window.
    pub fn tooltip(&mut self, text: &str) {
        let Some(pos) = self.mouse_pos else { return };
        let m = self.measure_text(text, theme::SMALL_SIZE);
        let (w, h) = (m.x + 12.0, m.y + 8.0);
        let frame_w = self.pixmap.width() as f32 / self.scale;
        let frame_h = self.pixmap.height() as f32 / self.scale;
        let x = (pos.x + 12.0).min(frame_w - w).max(0.0);
        let y = if pos.y + 18.0 + h > frame_h { pos.y - h - 6.0 } else { pos.y + 18.0 };
        let rect = Rect::new(x, y.max(0.0), w, h);
        self.fill_rounded_rect(rect, 4.0, theme::TOOLTIP, None);
        self.text_centered(text, theme::SMALL_SIZE, HexColor::WHITE, rect);
    }

    /// Composites a logical-pixel pixmap (such as the drawing surface) at
    /// `rect`'s origin.
    pub fn draw_pixmap(&mut self, src: &Pixmap, rect: Rect) {
        let quality = if self.scale == 1.0 { FilterQuality::Nearest } else { FilterQuality::Bilinear };
        let paint = PixmapPaint { quality, ..PixmapPaint::default() };
        self.pixmap.draw_pixmap(
            rect.x().round() as i32,
            rect.y().round() as i32,
            src.as_ref(),
            &paint,
            self.transform,
            None,
        );
    }
}

/// Rounded rectangle outline; the radius is clamped to half the short side.
pub(crate) fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    let r = radius.max(0.0).min(rect.width() * 0.5).min(rect.height() * 0.5);
    if r <= 0.0 {
        return Some(PathBuilder::from_rect(rect.to_skia()?));
    }

    // Cubic approximation of a quarter circle.
    const KAPPA: f32 = 0.552_284_8;
    let k = r * KAPPA;
    let (x0, y0, x1, y1) = (rect.x(), rect.y(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}
