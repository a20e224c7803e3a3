use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::input::Key;
use tincture_engine::paint::{GradientDirection, HexColor, Paint};

use crate::action::Action;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::Widget;

/// Dropdown over the six gradient directions.
///
/// The open list is an overlay below the box. The screen paints it last
/// through [`paint_overlay`](Self::paint_overlay) and routes events here
/// first while [`is_open`](Self::is_open).
pub struct DirectionSelect {
    selected: GradientDirection,
    open: bool,
}

impl DirectionSelect {
    pub fn new(selected: GradientDirection) -> Self {
        Self { selected, open: false }
    }

    pub fn selected(&self) -> GradientDirection {
        self.selected
    }

    pub fn set_selected(&mut self, dir: GradientDirection) {
        self.selected = dir;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Row of option `i` in the open list.
    pub fn option_rect(rect: Rect, i: usize) -> Rect {
        Rect::new(rect.x(), rect.bottom() + 2.0 + i as f32 * rect.height(), rect.width(), rect.height())
    }

    /// Whole open list.
    pub fn overlay_rect(rect: Rect) -> Rect {
        let n = GradientDirection::ALL.len() as f32;
        Rect::new(rect.x(), rect.bottom() + 2.0, rect.width(), n * rect.height())
    }

    fn option_at(rect: Rect, pos: Vec2) -> Option<GradientDirection> {
        GradientDirection::ALL
            .into_iter()
            .enumerate()
            .find(|(i, _)| Self::option_rect(rect, *i).contains(pos))
            .map(|(_, d)| d)
    }

    fn choose(&mut self, dir: GradientDirection, ctx: &mut EventCtx<'_>) {
        self.open = false;
        if dir != self.selected {
            self.selected = dir;
            ctx.emit(Action::SetDirection(dir));
        }
    }

    fn choose_keep_open(&mut self, dir: GradientDirection, ctx: &mut EventCtx<'_>) {
        self.choose(dir, ctx);
        self.open = true;
    }

    /// Draws the open list; no-op while closed.
    pub fn paint_overlay(&self, painter: &mut Painter, rect: Rect) {
        if !self.open {
            return;
        }
        let list = Self::overlay_rect(rect);
        painter.fill_rounded_rect(list, 6.0, Paint::Solid(theme::PANEL), Some(Border::new(1.0, theme::PANEL_BORDER)));
        for (i, dir) in GradientDirection::ALL.into_iter().enumerate() {
            let row = Self::option_rect(rect, i);
            let (bg, fg) = if dir == self.selected {
                (Some(theme::ACCENT), HexColor::WHITE)
            } else if painter.is_hovered(row) {
                (Some(theme::FIELD_HOVER), theme::TEXT)
            } else {
                (None, theme::TEXT)
            };
            if let Some(bg) = bg {
                painter.fill_rounded_rect(row.inset(2.0), 4.0, Paint::Solid(bg), None);
            }
            painter.text_in(dir.label(), theme::BODY_SIZE, fg, row, 10.0);
        }
    }
}

impl Widget for DirectionSelect {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let bg = if painter.is_hovered(rect) { theme::FIELD_HOVER } else { theme::FIELD };
        let border = if self.open { theme::ACCENT } else { theme::PANEL_BORDER };
        painter.fill_rounded_rect(rect, 6.0, Paint::Solid(bg), Some(Border::new(1.0, border)));
        painter.text_in(self.selected.label(), theme::BODY_SIZE, theme::TEXT, rect, 10.0);

        let cx = rect.right() - 14.0;
        let cy = rect.center().y;
        let caret = if self.open {
            [Vec2::new(cx - 5.0, cy + 3.0), Vec2::new(cx + 5.0, cy + 3.0), Vec2::new(cx, cy - 3.0)]
        } else {
            [Vec2::new(cx - 5.0, cy - 3.0), Vec2::new(cx + 5.0, cy - 3.0), Vec2::new(cx, cy + 3.0)]
        };
        painter.fill_triangle(caret, theme::TEXT_MUTED);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &mut EventCtx<'_>) -> EventResult {
        match *event {
            UiEvent::PointerDown { pos } if self.open => {
                match Self::option_at(rect, pos) {
                    Some(dir) => self.choose(dir, ctx),
                    None => self.open = false,
                }
                // An open list swallows the click that closes it.
                EventResult::Consumed
            }
            UiEvent::PointerDown { pos } if rect.contains(pos) => {
                self.open = true;
                EventResult::Consumed
            }
            UiEvent::PointerMove { pos } if self.open => {
                if Self::overlay_rect(rect).contains(pos) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            UiEvent::KeyPress { key } if self.open => {
                let idx = GradientDirection::ALL.iter().position(|d| *d == self.selected).unwrap_or(0);
                let n = GradientDirection::ALL.len();
                match key {
                    Key::Escape | Key::Enter | Key::Space => self.open = false,
                    Key::ArrowDown => self.choose_keep_open(GradientDirection::ALL[(idx + 1) % n], ctx),
                    Key::ArrowUp => self.choose_keep_open(GradientDirection::ALL[(idx + n - 1) % n], ctx),
                    _ => return EventResult::Ignored,
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 28.0)
    }

    fn send(s: &mut DirectionSelect, ev: UiEvent) -> (EventResult, Vec<Action>) {
        let mut actions = Vec::new();
        let r = s.on_event(&ev, rect(), &mut EventCtx::new(&mut actions));
        (r, actions)
    }

    fn center_of_option(i: usize) -> Vec2 {
        DirectionSelect::option_rect(rect(), i).center()
    }

    #[test]
    fn click_opens_then_option_selects() {
        let mut s = DirectionSelect::new(GradientDirection::ToRight);
        let (r, _) = send(&mut s, UiEvent::PointerDown { pos: Vec2::new(10.0, 10.0) });
        assert!(r.is_consumed());
        assert!(s.is_open());

        // ALL[4] is the 45 degree entry.
        let (_, a) = send(&mut s, UiEvent::PointerDown { pos: center_of_option(4) });
        assert_eq!(a, vec![Action::SetDirection(GradientDirection::Deg45)]);
        assert_eq!(s.selected(), GradientDirection::Deg45);
        assert!(!s.is_open());
    }

    #[test]
    fn reselecting_current_emits_nothing() {
        let mut s = DirectionSelect::new(GradientDirection::ToRight);
        send(&mut s, UiEvent::PointerDown { pos: Vec2::new(10.0, 10.0) });
        let (_, a) = send(&mut s, UiEvent::PointerDown { pos: center_of_option(0) });
        assert!(a.is_empty());
        assert!(!s.is_open());
    }

    #[test]
    fn click_elsewhere_closes_and_is_swallowed() {
        let mut s = DirectionSelect::new(GradientDirection::ToRight);
        send(&mut s, UiEvent::PointerDown { pos: Vec2::new(10.0, 10.0) });
        let (r, a) = send(&mut s, UiEvent::PointerDown { pos: Vec2::new(600.0, 600.0) });
        assert!(r.is_consumed());
        assert!(a.is_empty());
        assert!(!s.is_open());
    }

    #[test]
    fn closed_select_ignores_outside_clicks() {
        let mut s = DirectionSelect::new(GradientDirection::ToRight);
        let (r, _) = send(&mut s, UiEvent::PointerDown { pos: center_of_option(2) });
        assert!(!r.is_consumed());
    }

    #[test]
    fn arrow_keys_cycle_while_open() {
        let mut s = DirectionSelect::new(GradientDirection::Deg135);
        send(&mut s, UiEvent::PointerDown { pos: Vec2::new(10.0, 10.0) });
        let (_, a) = send(&mut s, UiEvent::KeyPress { key: Key::ArrowDown });
        assert_eq!(a, vec![Action::SetDirection(GradientDirection::ToRight)]);
        assert!(s.is_open());

        let (r, _) = send(&mut s, UiEvent::KeyPress { key: Key::Escape });
        assert!(r.is_consumed());
        assert!(!s.is_open());

        let (r, _) = send(&mut s, UiEvent::KeyPress { key: Key::Escape });
        assert!(!r.is_consumed());
    }
}
