use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::coords::{Rect, Vec2};
use crate::paint::HexColor;

use super::{FontId, FontSystem};

// The cache is dropped wholesale past this many entries.
const MAX_CACHED_GLYPHS: usize = 4096;

struct CachedGlyph {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

/// One run of single-style text.
#[derive(Debug, Clone)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: HexColor,
    /// Top-left of the layout box in logical pixels.
    pub origin: Vec2,
    pub max_width: Option<f32>,
}

/// Rasterizes text straight into a pixmap.
///
/// Layout happens at `size * scale` so glyphs are crisp on HiDPI surfaces.
/// Glyph bitmaps are cached by `GlyphRasterConfig` (font, glyph, pixel size).
pub struct TextRasterizer {
    cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    layout: Layout<()>,
}

impl Default for TextRasterizer {
    fn default() -> Self {
        Self { cache: HashMap::new(), layout: Layout::new(CoordinateSystem::PositiveYDown) }
    }
}

impl TextRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cached_glyphs(&self) -> usize {
        self.cache.len()
    }

    /// Blends `run` into `pixmap`.
    ///
    /// `scale` maps logical to physical pixels and `clip` (logical) bounds
    /// the written area.
    pub fn draw(
        &mut self,
        pixmap: &mut Pixmap,
        fonts: &FontSystem,
        run: &TextRun<'_>,
        scale: f32,
        clip: Option<Rect>,
    ) {
        let Some(font) = fonts.get(run.font) else {
            log::warn!("TextRasterizer: unknown {:?}, skipping", run.font);
            return;
        };
        if run.text.is_empty() || run.size <= 0.0 {
            return;
        }

        let scale = scale.max(0.01);
        self.layout.reset(&LayoutSettings {
            x: run.origin.x * scale,
            y: run.origin.y * scale,
            max_width: run.max_width.map(|w| w * scale),
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(run.text, run.size * scale, 0));

        if self.cache.len() > MAX_CACHED_GLYPHS {
            log::debug!("TextRasterizer: glyph cache full, clearing");
            self.cache.clear();
        }

        let bounds = physical_bounds(pixmap, clip, scale);
        let width = pixmap.width() as i64;
        let pixels = pixmap.pixels_mut();

        for g in self.layout.glyphs() {
            if g.width == 0 || g.height == 0 {
                continue;
            }
            let glyph = self.cache.entry(g.key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(g.key);
                CachedGlyph { width: metrics.width, height: metrics.height, coverage }
            });

            let gx = g.x.round() as i64;
            let gy = g.y.round() as i64;
            for row in 0..glyph.height {
                let py = gy + row as i64;
                if py < bounds.1 || py >= bounds.3 {
                    continue;
                }
                for col in 0..glyph.width {
                    let px = gx + col as i64;
                    if px < bounds.0 || px >= bounds.2 {
                        continue;
                    }
                    let cov = glyph.coverage[row * glyph.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let idx = (py * width + px) as usize;
                    pixels[idx] = blend_over(pixels[idx], run.color, cov);
                }
            }
        }
    }
}

/// Clip rect in physical pixels as `(left, top, right, bottom)`, half-open.
fn physical_bounds(pixmap: &Pixmap, clip: Option<Rect>, scale: f32) -> (i64, i64, i64, i64) {
    let (w, h) = (pixmap.width() as i64, pixmap.height() as i64);
    match clip {
        None => (0, 0, w, h),
        Some(c) => (
            ((c.x() * scale).floor() as i64).clamp(0, w),
            ((c.y() * scale).floor() as i64).clamp(0, h),
            ((c.right() * scale).ceil() as i64).clamp(0, w),
            ((c.bottom() * scale).ceil() as i64).clamp(0, h),
        ),
    }
}

/// Source-over of an opaque `color` at `coverage` onto a premultiplied pixel.
fn blend_over(dst: PremultipliedColorU8, color: HexColor, coverage: u8) -> PremultipliedColorU8 {
    let sa = coverage as u32;
    let inv = 255 - sa;
    let mix = |s: u8, d: u8| -> u8 { ((s as u32 * sa + d as u32 * inv + 127) / 255) as u8 };

    let a = ((255 * sa + dst.alpha() as u32 * inv + 127) / 255) as u8;
    let r = mix(color.r, dst.red()).min(a);
    let g = mix(color.g, dst.green()).min(a);
    let b = mix(color.b, dst.blue()).min(a);
    PremultipliedColorU8::from_rgba(r, g, b, a).unwrap_or(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(r: u8, g: u8, b: u8) -> PremultipliedColorU8 {
        PremultipliedColorU8::from_rgba(r, g, b, 255).unwrap()
    }

    #[test]
    fn full_coverage_replaces_destination() {
        let out = blend_over(opaque(255, 255, 255), HexColor::rgb(10, 20, 30), 255);
        assert_eq!((out.red(), out.green(), out.blue(), out.alpha()), (10, 20, 30, 255));
    }

    #[test]
    fn zero_coverage_keeps_destination() {
        let dst = opaque(200, 100, 50);
        let out = blend_over(dst, HexColor::BLACK, 0);
        assert_eq!(out, dst);
    }

    #[test]
    fn half_coverage_mixes() {
        let out = blend_over(opaque(255, 255, 255), HexColor::BLACK, 128);
        assert!((120..=130).contains(&out.red()));
        assert_eq!(out.alpha(), 255);
    }

    #[test]
    fn coverage_on_transparent_stays_premultiplied() {
        let clear = PremultipliedColorU8::from_rgba(0, 0, 0, 0).unwrap();
        let out = blend_over(clear, HexColor::WHITE, 64);
        assert_eq!(out.alpha(), 64);
        assert!(out.red() <= out.alpha());
    }

    #[test]
    fn clip_bounds_are_scaled_and_clamped() {
        let pm = Pixmap::new(100, 50).unwrap();
        let b = physical_bounds(&pm, Some(Rect::new(10.0, 5.0, 100.0, 10.0)), 2.0);
        assert_eq!(b, (20, 10, 100, 30));
        assert_eq!(physical_bounds(&pm, None, 2.0), (0, 0, 100, 50));
    }

    #[test]
    fn unknown_font_draws_nothing() {
        let mut pm = Pixmap::new(20, 20).unwrap();
        let fonts = FontSystem::new();
        let mut raster = TextRasterizer::new();
        let run = TextRun {
            text: "hi",
            font: FontId(0),
            size: 12.0,
            color: HexColor::BLACK,
            origin: Vec2::zero(),
            max_width: None,
        };
        raster.draw(&mut pm, &fonts, &run, 1.0, None);
        assert!(pm.pixels().iter().all(|p| p.alpha() == 0));
        assert_eq!(raster.cached_glyphs(), 0);
    }
}
