use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::Paint;

use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::Widget;

/// Box filled with the current solid color or gradient.
pub struct Preview {
    paint: Paint,
    hint: String,
}

impl Preview {
    pub fn new(paint: impl Into<Paint>, hint: impl Into<String>) -> Self {
        Self { paint: paint.into(), hint: hint.into() }
    }

    /// Replaces the fill and its hover text (the CSS value).
    pub fn set(&mut self, paint: impl Into<Paint>, hint: impl Into<String>) {
        self.paint = paint.into();
        self.hint = hint.into();
    }
}

impl Widget for Preview {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rounded_rect(rect, theme::CORNER_RADIUS, self.paint, Some(Border::new(1.0, theme::PANEL_BORDER)));
    }

    fn tooltip(&self, rect: Rect, pos: Vec2) -> Option<String> {
        rect.contains(pos).then(|| self.hint.clone())
    }
}
