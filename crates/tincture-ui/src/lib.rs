//! Tincture UI: a solid/gradient color picker with a pen tool, drawn with
//! `tincture-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tincture_ui::Application;
//!
//! Application::new()
//!     .title("Color Picker Tool")
//!     .font("body", std::fs::read("DejaVuSans.ttf").unwrap())
//!     .run();
//! ```
//!
//! State lives in [`picker::PickerState`] and [`pen::PenTool`]; widgets only
//! emit [`action::Action`]s which [`screen::ColorPickerScreen`] applies after
//! each event.

pub mod action;
pub mod app;
pub mod clipboard;
pub mod event;
pub mod layout;
pub mod notify;
pub mod painter;
pub mod pen;
pub mod picker;
pub mod screen;
pub mod theme;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// The types an embedder or a test needs.
pub mod prelude {
    pub use crate::action::{Action, ColorTarget};
    pub use crate::app::Application;
    pub use crate::clipboard::{ClipboardError, ClipboardSink, ClipboardWorker, CopyOutcome, SystemClipboard};
    pub use crate::event::{EventCtx, EventResult, UiEvent};
    pub use crate::notify::{Toast, ToastKind, Toasts};
    pub use crate::painter::{Border, Painter};
    pub use crate::pen::{PenState, PenTool};
    pub use crate::picker::{GradientStop, PickerState, SavedColor};
    pub use crate::screen::ColorPickerScreen;
    pub use crate::widget::Widget;

    pub use tincture_engine::canvas::{Canvas2d, LineCap, PixmapCanvas, StrokeStyle};
    pub use tincture_engine::coords::{Rect, Vec2};
    pub use tincture_engine::paint::{Channel, Gradient, GradientDirection, HexColor, Paint};
}
