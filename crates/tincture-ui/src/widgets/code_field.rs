use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::Paint;

use crate::action::Action;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::Widget;

/// Read-only text box; clicking it copies the text.
pub struct CodeField {
    text: String,
    armed: bool,
}

impl CodeField {
    pub const HINT: &'static str = "Click to copy!";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), armed: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for CodeField {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_hovered(rect) { theme::FIELD_HOVER } else { theme::FIELD };
        painter.fill_rounded_rect(rect, 6.0, Paint::Solid(bg), Some(Border::new(1.0, theme::PANEL_BORDER)));
        painter.text_in(&self.text, theme::BODY_SIZE, theme::TEXT, rect, 10.0);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &mut EventCtx<'_>) -> EventResult {
        match event {
            UiEvent::PointerDown { pos } if rect.contains(*pos) => {
                self.armed = true;
                EventResult::Consumed
            }
            UiEvent::PointerUp { pos } if self.armed => {
                self.armed = false;
                if rect.contains(*pos) {
                    ctx.emit(Action::Copy(self.text.clone()));
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn tooltip(&self, rect: Rect, pos: Vec2) -> Option<String> {
        rect.contains(pos).then(|| Self::HINT.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_copies_current_text() {
        let rect = Rect::new(0.0, 0.0, 200.0, 32.0);
        let mut f = CodeField::new("#3498db");
        f.set_text("#000000");

        let mut actions = Vec::new();
        let mut ctx = EventCtx::new(&mut actions);
        f.on_event(&UiEvent::PointerDown { pos: Vec2::new(5.0, 5.0) }, rect, &mut ctx);
        f.on_event(&UiEvent::PointerUp { pos: Vec2::new(6.0, 5.0) }, rect, &mut ctx);
        assert_eq!(actions, vec![Action::Copy("#000000".into())]);
    }

    #[test]
    fn hover_hint_only_inside() {
        let rect = Rect::new(0.0, 0.0, 200.0, 32.0);
        let f = CodeField::new("x");
        assert_eq!(f.tooltip(rect, Vec2::new(10.0, 10.0)).as_deref(), Some("Click to copy!"));
        assert!(f.tooltip(rect, Vec2::new(10.0, 40.0)).is_none());
    }
}
