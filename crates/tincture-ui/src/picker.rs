//! Color and gradient state holder.

use tincture_engine::paint::{Gradient, GradientDirection, HexColor};

/// Solid color restored by [`PickerState::reset`].
pub const DEFAULT_SOLID: HexColor = HexColor::from_u32(0x3498db);

/// Gradient restored by [`PickerState::reset`].
pub const DEFAULT_GRADIENT: Gradient = Gradient::new(
    HexColor::from_u32(0xff6a00),
    HexColor::from_u32(0xee0979),
    GradientDirection::ToRight,
);

/// Which end of the gradient an edit targets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientStop {
    First,
    Second,
}

impl GradientStop {
    pub fn label(self) -> &'static str {
        match self {
            GradientStop::First => "Color 1",
            GradientStop::Second => "Color 2",
        }
    }
}

/// Snapshot of the picker taken by [`PickerState::save`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SavedColor {
    pub solid: HexColor,
    pub gradient: Gradient,
}

/// Current solid color, current gradient and the saved history.
///
/// All setters replace values wholesale; the saved list only grows.
#[derive(Debug, Clone)]
pub struct PickerState {
    solid: HexColor,
    gradient: Gradient,
    saved: Vec<SavedColor>,
}

impl PickerState {
    pub fn new() -> Self {
        Self { solid: DEFAULT_SOLID, gradient: DEFAULT_GRADIENT, saved: Vec::new() }
    }

    #[inline]
    pub fn solid(&self) -> HexColor {
        self.solid
    }

    #[inline]
    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    pub fn set_solid_color(&mut self, value: HexColor) {
        log::debug!("solid color {} -> {}", self.solid, value);
        self.solid = value;
    }

    pub fn set_gradient_stop(&mut self, which: GradientStop, value: HexColor) {
        log::debug!("gradient {:?} -> {}", which, value);
        match which {
            GradientStop::First => self.gradient.color1 = value,
            GradientStop::Second => self.gradient.color2 = value,
        }
    }

    pub fn set_gradient_direction(&mut self, value: GradientDirection) {
        log::debug!("gradient direction {} -> {}", self.gradient.direction, value);
        self.gradient.direction = value;
    }

    /// Restores the default solid color and gradient. Saved entries stay.
    pub fn reset(&mut self) {
        log::debug!("picker reset");
        self.solid = DEFAULT_SOLID;
        self.gradient = DEFAULT_GRADIENT;
    }

    /// Appends a snapshot of the current colors.
    pub fn save(&mut self) {
        let entry = SavedColor { solid: self.solid, gradient: self.gradient };
        self.saved.push(entry);
        log::debug!("saved {} ({} entries)", entry.gradient.css(), self.saved.len());
    }

    /// Saved snapshots in insertion order.
    #[inline]
    pub fn saved(&self) -> &[SavedColor] {
        &self.saved
    }

    /// The gradient as a CSS expression, rebuilt on every call.
    pub fn gradient_css(&self) -> String {
        self.gradient.css()
    }

    /// The solid color as `#rrggbb`.
    pub fn solid_css(&self) -> String {
        self.solid.to_string()
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(v: u32) -> HexColor {
        HexColor::from_u32(v)
    }

    // ── defaults / reset ──────────────────────────────────────────────────

    #[test]
    fn starts_at_defaults() {
        let p = PickerState::new();
        assert_eq!(p.solid_css(), "#3498db");
        assert_eq!(p.gradient_css(), "linear-gradient(to right, #ff6a00, #ee0979)");
        assert!(p.saved().is_empty());
    }

    #[test]
    fn reset_restores_exact_defaults() {
        let mut p = PickerState::new();
        p.set_solid_color(hex(0x123456));
        p.set_gradient_stop(GradientStop::First, hex(0x000000));
        p.set_gradient_stop(GradientStop::Second, hex(0xffffff));
        p.set_gradient_direction(GradientDirection::Deg45);

        p.reset();
        assert_eq!(p.solid(), hex(0x3498db));
        assert_eq!(p.gradient().color1, hex(0xff6a00));
        assert_eq!(p.gradient().color2, hex(0xee0979));
        assert_eq!(p.gradient().direction, GradientDirection::ToRight);
    }

    #[test]
    fn reset_keeps_saved_list() {
        let mut p = PickerState::new();
        p.save();
        p.save();
        p.reset();
        assert_eq!(p.saved().len(), 2);
    }

    // ── setters ───────────────────────────────────────────────────────────

    #[test]
    fn stop_setter_touches_one_field() {
        let mut p = PickerState::new();
        p.set_gradient_stop(GradientStop::Second, hex(0x00ff00));
        let g = p.gradient();
        assert_eq!(g.color1, hex(0xff6a00));
        assert_eq!(g.color2, hex(0x00ff00));
        assert_eq!(g.direction, GradientDirection::ToRight);
    }

    #[test]
    fn cycling_directions_never_touches_stops() {
        let mut p = PickerState::new();
        p.set_gradient_stop(GradientStop::First, hex(0x111111));
        p.set_gradient_stop(GradientStop::Second, hex(0x222222));
        for _ in 0..3 {
            for dir in GradientDirection::ALL {
                p.set_gradient_direction(dir);
                assert_eq!(p.gradient().direction, dir);
                assert_eq!(p.gradient().color1, hex(0x111111));
                assert_eq!(p.gradient().color2, hex(0x222222));
            }
        }
    }

    #[test]
    fn gradient_css_follows_state() {
        let mut p = PickerState::new();
        p.set_gradient_direction(GradientDirection::Deg135);
        p.set_gradient_stop(GradientStop::First, hex(0xabcdef));
        assert_eq!(p.gradient_css(), "linear-gradient(135deg, #abcdef, #ee0979)");
    }

    // ── save ──────────────────────────────────────────────────────────────

    #[test]
    fn save_snapshots_are_independent_of_later_edits() {
        let mut p = PickerState::new();
        let mut expected = Vec::new();
        for i in 0..5u32 {
            p.set_solid_color(hex(i * 0x111111));
            p.set_gradient_direction(GradientDirection::ALL[i as usize % 6]);
            expected.push(SavedColor { solid: p.solid(), gradient: p.gradient() });
            p.save();
        }
        p.set_solid_color(hex(0xffffff));
        p.reset();

        assert_eq!(p.saved(), expected.as_slice());
    }

    #[test]
    fn save_does_not_deduplicate() {
        let mut p = PickerState::new();
        p.save();
        p.save();
        assert_eq!(p.saved().len(), 2);
        assert_eq!(p.saved()[0], p.saved()[1]);
    }
}
