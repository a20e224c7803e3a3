use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::Paint;

use crate::layout::swatch_rects;
use crate::painter::{Border, Painter};
use crate::picker::SavedColor;
use crate::theme;
use crate::widget::Widget;

/// Saved gradients as wrapping swatches, in insertion order.
///
/// Entries that do not fit the rect are not drawn.
#[derive(Default)]
pub struct SwatchList {
    entries: Vec<SavedColor>,
}

impl SwatchList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_entries(&mut self, entries: &[SavedColor]) {
        self.entries.clear();
        self.entries.extend_from_slice(entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn hit(&self, rect: Rect, pos: Vec2) -> Option<&SavedColor> {
        swatch_rects(rect, self.entries.len())
            .into_iter()
            .position(|r| r.contains(pos))
            .map(|i| &self.entries[i])
    }
}

impl Widget for SwatchList {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for (entry, slot) in self.entries.iter().zip(swatch_rects(rect, self.entries.len())) {
            let border = if painter.is_hovered(slot) { theme::ACCENT } else { theme::PANEL_BORDER };
            painter.fill_rounded_rect(slot, 6.0, Paint::Linear(entry.gradient), Some(Border::new(2.0, border)));
        }
    }

    fn tooltip(&self, rect: Rect, pos: Vec2) -> Option<String> {
        self.hit(rect, pos).map(|e| e.gradient.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_engine::paint::{Gradient, GradientDirection, HexColor};

    fn entry(c: u32) -> SavedColor {
        SavedColor {
            solid: HexColor::from_u32(c),
            gradient: Gradient::new(HexColor::from_u32(c), HexColor::WHITE, GradientDirection::Deg45),
        }
    }

    #[test]
    fn hover_describes_the_swatch_under_pointer() {
        let mut list = SwatchList::new();
        list.set_entries(&[entry(0x000000), entry(0x112233)]);
        let area = Rect::new(0.0, 0.0, 300.0, 100.0);

        assert_eq!(
            list.tooltip(area, Vec2::new(60.0, 10.0)).as_deref(),
            Some("Gradient: 45deg, #112233, #ffffff"),
        );
        assert!(list.tooltip(area, Vec2::new(52.0, 10.0)).is_none());
        assert!(list.tooltip(area, Vec2::new(200.0, 10.0)).is_none());
    }

    #[test]
    fn hidden_entries_have_no_hover() {
        let mut list = SwatchList::new();
        list.set_entries(&[entry(1), entry(2), entry(3)]);
        // Room for one swatch only.
        let area = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(list.tooltip(area, Vec2::new(10.0, 10.0)).is_some());
        assert!(list.tooltip(area, Vec2::new(10.0, 60.0)).is_none());
    }
}
