use tiny_skia::{BlendMode, FillRule, PathBuilder, Pixmap, Stroke, Transform};

use crate::coords::{Rect, Vec2};
use crate::paint::HexColor;

use super::{Canvas2d, CanvasError, LineCap, StrokeStyle};

#[derive(Debug, Clone)]
struct SubPath {
    points: Vec<Vec2>,
    closed: bool,
}

impl SubPath {
    fn starting_at(p: Vec2) -> Self {
        Self { points: vec![p], closed: false }
    }
}

/// [`Canvas2d`] backed by a `tiny_skia::Pixmap`.
///
/// One pixmap pixel per logical pixel; the painter scales the finished pixmap
/// when compositing it into the frame. Stroking redraws the whole open path,
/// as a browser canvas does.
pub struct PixmapCanvas {
    pixmap: Pixmap,
    style: StrokeStyle,
    subpaths: Vec<SubPath>,
}

impl PixmapCanvas {
    /// Acquires a transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::ZeroSize {
            width: width as f32,
            height: height as f32,
        })?;
        log::debug!("acquired {width}x{height} drawing surface");
        Ok(Self { pixmap, style: StrokeStyle::default(), subpaths: Vec::new() })
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Alpha of the pixel at `(x, y)`, or 0 outside the surface.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixmap.pixel(x, y).map(|p| p.alpha()).unwrap_or(0)
    }

    /// Un-premultiplied color of the pixel at `(x, y)` if it is opaque.
    pub fn opaque_color_at(&self, x: u32, y: u32) -> Option<HexColor> {
        let p = self.pixmap.pixel(x, y)?;
        (p.alpha() == 255).then(|| HexColor::rgb(p.red(), p.green(), p.blue()))
    }

    /// Number of pixels with any coverage.
    pub fn painted_pixels(&self) -> usize {
        self.pixmap.pixels().iter().filter(|p| p.alpha() > 0).count()
    }

    /// Clears the entire surface.
    pub fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(Rect::new(0.0, 0.0, size.x, size.y));
    }

    fn build_path(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for sub in self.subpaths.iter().filter(|s| s.points.len() >= 2) {
            let first = sub.points[0];
            pb.move_to(first.x, first.y);
            for p in &sub.points[1..] {
                pb.line_to(p.x, p.y);
            }
            if sub.closed {
                pb.close();
            }
        }
        pb.finish()
    }
}

impl Canvas2d for PixmapCanvas {
    fn size(&self) -> Vec2 {
        Vec2::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn set_line_width(&mut self, width: f32) {
        // Browser contexts ignore non-positive and non-finite widths.
        if width.is_finite() && width > 0.0 {
            self.style.width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.style.cap = cap;
    }

    fn set_stroke_color(&mut self, color: HexColor) {
        self.style.color = color;
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        if p.is_finite() {
            self.subpaths.push(SubPath::starting_at(p));
        }
    }

    fn line_to(&mut self, p: Vec2) {
        if !p.is_finite() {
            return;
        }
        match self.subpaths.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            // No open sub-path: behaves like move_to.
            _ => self.subpaths.push(SubPath::starting_at(p)),
        }
    }

    fn stroke(&mut self) {
        let Some(path) = self.build_path() else {
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;
        paint.set_color(self.style.color.to_skia());

        let stroke = Stroke {
            width: self.style.width,
            line_cap: self.style.cap.to_skia(),
            line_join: tiny_skia::LineJoin::Round,
            ..Stroke::default()
        };

        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn close_path(&mut self) {
        let Some(sub) = self.subpaths.last_mut() else {
            return;
        };
        if sub.closed {
            return;
        }
        sub.closed = true;
        // The next segment starts from the closed sub-path's first point.
        let start = sub.points[0];
        self.subpaths.push(SubPath::starting_at(start));
    }

    fn clear_rect(&mut self, rect: Rect) {
        let Some(r) = rect.to_skia() else {
            return;
        };
        let mut paint = tiny_skia::Paint::default();
        paint.blend_mode = BlendMode::Clear;
        paint.anti_alias = false;

        let path = PathBuilder::from_rect(r);
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }
}
