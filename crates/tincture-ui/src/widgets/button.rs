use tincture_engine::coords::Rect;
use tincture_engine::paint::{HexColor, Paint};

use crate::action::Action;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::Painter;
use crate::theme;
use crate::widget::Widget;

/// A labelled push button that emits one [`Action`] per click.
///
/// A click is a press and a release both inside the button. Visual state
/// (hover, press) is read from `Painter` during `paint`.
///
/// # Example
/// ```rust,ignore
/// Button::new("Save Color", Action::Save)
///     .background(theme::SAVE_BUTTON)
///     .hover_background(theme::SAVE_BUTTON_HOVER)
/// ```
pub struct Button {
    label: &'static str,
    action: Action,
    background: HexColor,
    hover_background: HexColor,
    text_color: HexColor,
    corner_radius: f32,
    /// A press started inside and has not been released yet.
    armed: bool,
}

impl Button {
    pub fn new(label: &'static str, action: Action) -> Self {
        Self {
            label,
            action,
            background: theme::NEUTRAL_BUTTON,
            hover_background: theme::NEUTRAL_BUTTON_HOVER,
            text_color: HexColor::WHITE,
            corner_radius: 6.0,
            armed: false,
        }
    }

    pub fn background(mut self, color: HexColor) -> Self {
        self.background = color;
        self
    }

    /// Background color when the cursor is over the button.
    pub fn hover_background(mut self, color: HexColor) -> Self {
        self.hover_background = color;
        self
    }
}

impl Widget for Button {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_hovered(rect) { self.hover_background } else { self.background };
        // Pressed buttons sink by a pixel.
        let rect = if painter.is_pressed(rect) && self.armed {
            Rect::new(rect.x(), rect.y() + 1.0, rect.width(), rect.height())
        } else {
            rect
        };
        painter.fill_rounded_rect(rect, self.corner_radius, Paint::Solid(bg), None);
        painter.text_centered(self.label, theme::BODY_SIZE, self.text_color, rect);
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
                    ctx.emit(self.action.clone());
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_engine::coords::Vec2;

    fn rect() -> Rect {
        Rect::new(10.0, 10.0, 100.0, 30.0)
    }

    fn send(b: &mut Button, ev: UiEvent) -> (EventResult, Vec<Action>) {
        let mut actions = Vec::new();
        let r = b.on_event(&ev, rect(), &mut EventCtx::new(&mut actions));
        (r, actions)
    }

    #[test]
    fn click_inside_emits_action_once() {
        let mut b = Button::new("Save Color", Action::Save);
        let (r, a) = send(&mut b, UiEvent::PointerDown { pos: Vec2::new(20.0, 20.0) });
        assert!(r.is_consumed());
        assert!(a.is_empty());

        let (r, a) = send(&mut b, UiEvent::PointerUp { pos: Vec2::new(30.0, 25.0) });
        assert!(r.is_consumed());
        assert_eq!(a, vec![Action::Save]);

        // A second release without a press does nothing.
        let (_, a) = send(&mut b, UiEvent::PointerUp { pos: Vec2::new(30.0, 25.0) });
        assert!(a.is_empty());
    }

    #[test]
    fn release_outside_cancels() {
        let mut b = Button::new("Reset", Action::Reset);
        send(&mut b, UiEvent::PointerDown { pos: Vec2::new(20.0, 20.0) });
        let (r, a) = send(&mut b, UiEvent::PointerUp { pos: Vec2::new(500.0, 500.0) });
        assert!(!r.is_consumed());
        assert!(a.is_empty());
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut b = Button::new("Clear Canvas", Action::ClearCanvas);
        let (r, _) = send(&mut b, UiEvent::PointerDown { pos: Vec2::new(0.0, 0.0) });
        assert!(!r.is_consumed());
        let (_, a) = send(&mut b, UiEvent::PointerUp { pos: Vec2::new(20.0, 20.0) });
        assert!(a.is_empty());
    }
}
