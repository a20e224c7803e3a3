use tincture_engine::paint::{GradientDirection, HexColor};

use crate::picker::GradientStop;

/// Which color a [`ColorField`](crate::widgets::color_field::ColorField) edits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorTarget {
    Solid,
    Stop(GradientStop),
    Pen,
}

impl ColorTarget {
    /// The action that sets this target to `color`.
    pub fn action(self, color: HexColor) -> Action {
        match self {
            ColorTarget::Solid => Action::SetSolid(color),
            ColorTarget::Stop(which) => Action::SetGradientStop(which, color),
            ColorTarget::Pen => Action::SetPenColor(color),
        }
    }
}

/// State change requested by a widget, applied by the screen after routing.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSolid(HexColor),
    SetGradientStop(GradientStop, HexColor),
    SetDirection(GradientDirection),
    SetPenColor(HexColor),
    Save,
    Reset,
    ClearCanvas,
    Copy(String),
}
