use tincture_engine::coords::Vec2;
use tincture_engine::input::Key;

use crate::action::Action;

/// Input events routed to widgets, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed at `pos`.
    PointerDown { pos: Vec2 },
    /// Pointer moved to `pos`, button held or not.
    PointerMove { pos: Vec2 },
    /// Primary button released at `pos`, which may be outside the widget
    /// that saw the press.
    PointerUp { pos: Vec2 },
    KeyPress { key: Key },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

/// Collects the actions widgets emit while handling one event.
pub struct EventCtx<'a> {
    actions: &'a mut Vec<Action>,
}

impl<'a> EventCtx<'a> {
    pub fn new(actions: &'a mut Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn emit(&mut self, action: Action) {
        self.actions.push(action);
    }
}
