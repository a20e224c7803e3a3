use tincture_engine::coords::{Rect, Vec2};

use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::Painter;

/// A UI component placed at a rect chosen by the screen layout.
///
/// Widgets keep only interaction state (hover, drag, open). Values they
/// display are pushed in by the screen before painting, and changes go out
/// as actions through [`EventCtx`].
pub trait Widget {
    /// Draw within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop routing.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &mut EventCtx<'_>) -> EventResult {
        EventResult::Ignored
    }

    /// Hover hint for the pointer at `pos`, drawn above everything else.
    fn tooltip(&self, _rect: Rect, _pos: Vec2) -> Option<String> {
        None
    }
}
