use std::fmt;

use crate::coords::{Rect, Vec2};

use super::HexColor;

/// Direction of a two-stop linear gradient, limited to the fixed set the
/// picker offers.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientDirection {
    #[default]
    ToRight,
    ToLeft,
    ToBottom,
    ToTop,
    Deg45,
    Deg135,
}

impl GradientDirection {
    /// All directions in menu order.
    pub const ALL: [GradientDirection; 6] = [
        GradientDirection::ToRight,
        GradientDirection::ToLeft,
        GradientDirection::ToBottom,
        GradientDirection::ToTop,
        GradientDirection::Deg45,
        GradientDirection::Deg135,
    ];

    /// Value used inside `linear-gradient(...)`.
    pub fn css(self) -> &'static str {
        match self {
            GradientDirection::ToRight => "to right",
            GradientDirection::ToLeft => "to left",
            GradientDirection::ToBottom => "to bottom",
            GradientDirection::ToTop => "to top",
            GradientDirection::Deg45 => "45deg",
            GradientDirection::Deg135 => "135deg",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            GradientDirection::ToRight => "Left → Right",
            GradientDirection::ToLeft => "Right → Left",
            GradientDirection::ToBottom => "Top → Bottom",
            GradientDirection::ToTop => "Bottom → Top",
            GradientDirection::Deg45 => "45° Angle",
            GradientDirection::Deg135 => "135° Angle",
        }
    }

    /// CSS gradient angle: 0° points up, angles grow clockwise.
    pub fn angle_deg(self) -> f32 {
        match self {
            GradientDirection::ToTop => 0.0,
            GradientDirection::Deg45 => 45.0,
            GradientDirection::ToRight => 90.0,
            GradientDirection::Deg135 => 135.0,
            GradientDirection::ToBottom => 180.0,
            GradientDirection::ToLeft => 270.0,
        }
    }

    pub fn from_css(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.css() == s.trim())
    }

    /// Gradient line for `rect`, as CSS lays it out: through the center, long
    /// enough that the corners perpendicular to it get the pure end colors.
    pub fn endpoints(self, rect: Rect) -> (Vec2, Vec2) {
        let theta = self.angle_deg().to_radians();
        let (sin, cos) = theta.sin_cos();
        let dir = Vec2::new(sin, -cos);
        let len = (rect.width() * sin).abs() + (rect.height() * cos).abs();
        let half = dir * (len * 0.5);
        let c = rect.center();
        (c - half, c + half)
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css())
    }
}

/// Two-stop linear gradient.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Gradient {
    pub color1: HexColor,
    pub color2: HexColor,
    pub direction: GradientDirection,
}

impl Gradient {
    pub const fn new(color1: HexColor, color2: HexColor, direction: GradientDirection) -> Self {
        Self { color1, color2, direction }
    }

    /// `linear-gradient(<direction>, <color1>, <color2>)`.
    pub fn css(&self) -> String {
        format!("linear-gradient({}, {}, {})", self.direction, self.color1, self.color2)
    }

    /// Tooltip text used for saved swatches.
    pub fn describe(&self) -> String {
        format!("Gradient: {}, {}, {}", self.direction, self.color1, self.color2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    // ── css ───────────────────────────────────────────────────────────────

    #[test]
    fn css_expression_matches_browser_syntax() {
        let g = Gradient::new(
            HexColor::from_u32(0xff6a00),
            HexColor::from_u32(0xee0979),
            GradientDirection::ToRight,
        );
        assert_eq!(g.css(), "linear-gradient(to right, #ff6a00, #ee0979)");
    }

    #[test]
    fn angle_directions_use_deg_suffix() {
        let g = Gradient::new(HexColor::BLACK, HexColor::WHITE, GradientDirection::Deg135);
        assert_eq!(g.css(), "linear-gradient(135deg, #000000, #ffffff)");
    }

    #[test]
    fn from_css_round_trips_every_direction() {
        for d in GradientDirection::ALL {
            assert_eq!(GradientDirection::from_css(d.css()), Some(d));
        }
        assert_eq!(GradientDirection::from_css("sideways"), None);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = GradientDirection::ALL.iter().map(|d| d.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }

    // ── endpoints ─────────────────────────────────────────────────────────

    #[test]
    fn side_keywords_span_the_box() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);

        let (s, e) = GradientDirection::ToRight.endpoints(rect);
        assert!(close(s, Vec2::new(0.0, 25.0)) && close(e, Vec2::new(100.0, 25.0)));

        let (s, e) = GradientDirection::ToLeft.endpoints(rect);
        assert!(close(s, Vec2::new(100.0, 25.0)) && close(e, Vec2::new(0.0, 25.0)));

        let (s, e) = GradientDirection::ToBottom.endpoints(rect);
        assert!(close(s, Vec2::new(50.0, 0.0)) && close(e, Vec2::new(50.0, 50.0)));

        let (s, e) = GradientDirection::ToTop.endpoints(rect);
        assert!(close(s, Vec2::new(50.0, 50.0)) && close(e, Vec2::new(50.0, 0.0)));
    }

    #[test]
    fn diagonal_on_square_runs_corner_to_corner() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        let (s, e) = GradientDirection::Deg45.endpoints(rect);
        assert!(close(s, Vec2::new(0.0, 100.0)), "{s:?}");
        assert!(close(e, Vec2::new(100.0, 0.0)), "{e:?}");

        let (s, e) = GradientDirection::Deg135.endpoints(rect);
        assert!(close(s, Vec2::new(0.0, 0.0)), "{s:?}");
        assert!(close(e, Vec2::new(100.0, 100.0)), "{e:?}");
    }
}
