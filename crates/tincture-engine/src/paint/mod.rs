//! Paint model shared by the picker state and the painter.
//!
//! `HexColor` and `Gradient` are plain values; [`Paint`] turns them into a
//! tiny-skia paint for a given rectangle.

pub mod color;
pub mod gradient;

pub use color::{Channel, HexColor, ParseColorError};
pub use gradient::{Gradient, GradientDirection};

use crate::coords::{Rect, Vec2};

/// Fill source for a rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(HexColor),
    /// Solid color with straight alpha, for overlays.
    Translucent(HexColor, u8),
    Linear(Gradient),
    /// Horizontal ramp between two colors, used for slider tracks.
    Ramp(HexColor, HexColor),
}

impl From<HexColor> for Paint {
    fn from(c: HexColor) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Linear(g)
    }
}

impl Paint {
    /// Builds the tiny-skia paint for filling `rect`.
    ///
    /// Gradient endpoints are computed in the same space as `rect`; the draw
    /// transform then applies to geometry and shader alike.
    pub fn to_skia(&self, rect: Rect) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint::default();
        paint.anti_alias = true;

        match *self {
            Paint::Solid(c) => paint.set_color(c.to_skia()),
            Paint::Translucent(c, a) => paint.set_color(c.to_skia_alpha(a)),
            Paint::Linear(g) => {
                let (start, end) = g.direction.endpoints(rect);
                paint.shader = two_stop(start, end, g.color1, g.color2);
            }
            Paint::Ramp(from, to) => {
                let y = rect.center().y;
                let start = Vec2::new(rect.x(), y);
                let end = Vec2::new(rect.right(), y);
                paint.shader = two_stop(start, end, from, to);
            }
        }

        paint
    }
}

fn two_stop(
    start: Vec2,
    end: Vec2,
    from: HexColor,
    to: HexColor,
) -> tiny_skia::Shader<'static> {
    tiny_skia::LinearGradient::new(
        tiny_skia::Point::from_xy(start.x, start.y),
        tiny_skia::Point::from_xy(end.x, end.y),
        vec![
            tiny_skia::GradientStop::new(0.0, from.to_skia()),
            tiny_skia::GradientStop::new(1.0, to.to_skia()),
        ],
        tiny_skia::SpreadMode::Pad,
        tiny_skia::Transform::identity(),
    )
    // Degenerate line (zero-size rect): fall back to the first stop.
    .unwrap_or(tiny_skia::Shader::SolidColor(from.to_skia()))
}
