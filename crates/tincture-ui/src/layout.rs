//! Fixed placement of every element on the picker screen.
//!
//! The window is not resizable, so positions are computed once from the
//! logical window size. Heights are constant; widths split the window into
//! two equal columns.

use tincture_engine::coords::{Rect, Vec2};

/// Drawing surface size in logical pixels.
pub const CANVAS_WIDTH: u32 = 464;
pub const CANVAS_HEIGHT: u32 = 200;

pub const MARGIN: f32 = 24.0;
/// Inner padding of the two color panels.
pub const PANEL_PAD: f32 = 16.0;
pub const PANEL_HEIGHT: f32 = 330.0;

pub const SWATCH_SIZE: f32 = 48.0;
pub const SWATCH_GAP: f32 = 8.0;

const PANEL_TOP: f32 = 96.0;
const ROW2_TOP: f32 = 450.0;
const BUTTON_W: f32 = 140.0;
const BUTTON_H: f32 = 36.0;
const FIELD_H: f32 = 84.0;
const CODE_H: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLayout {
    pub size: Vec2,

    pub title: Rect,
    pub subtitle: Rect,

    pub solid_panel: Rect,
    pub solid_heading: Rect,
    pub solid_field: Rect,
    pub solid_code_label: Rect,
    pub solid_code: Rect,
    pub solid_preview: Rect,

    pub gradient_panel: Rect,
    pub gradient_heading: Rect,
    pub stop_fields: [Rect; 2],
    pub direction: Rect,
    pub gradient_code_label: Rect,
    pub gradient_code: Rect,
    pub gradient_preview: Rect,

    pub save_button: Rect,
    pub reset_button: Rect,
    pub saved_heading: Rect,
    /// Region the swatches wrap inside.
    pub saved_area: Rect,

    pub pen_heading: Rect,
    pub pen_field: Rect,
    pub clear_button: Rect,
    pub canvas: Rect,
}

impl ScreenLayout {
    pub fn new(size: Vec2) -> Self {
        let col_w = ((size.x - 3.0 * MARGIN) / 2.0).max(0.0);
        let left = MARGIN;
        let right = MARGIN * 2.0 + col_w;
        let full_w = (size.x - 2.0 * MARGIN).max(0.0);

        let solid_panel = Rect::new(left, PANEL_TOP, col_w, PANEL_HEIGHT);
        let gradient_panel = Rect::new(right, PANEL_TOP, col_w, PANEL_HEIGHT);

        let solid_inner = panel_inner(solid_panel);
        let grad_inner = panel_inner(gradient_panel);
        let half = ((grad_inner.width() - PANEL_PAD) / 2.0).max(0.0);

        let canvas_y = ROW2_TOP + 28.0 + FIELD_H + 12.0;

        Self {
            size,

            title: Rect::new(MARGIN, 16.0, full_w, 32.0),
            subtitle: Rect::new(MARGIN, 52.0, full_w, 20.0),

            solid_panel,
            solid_heading: row(solid_inner, 0.0, 24.0),
            solid_field: row(solid_inner, 32.0, FIELD_H),
            solid_code_label: row(solid_inner, 124.0, 18.0),
            solid_code: row(solid_inner, 144.0, CODE_H),
            solid_preview: row(solid_inner, 188.0, 110.0),

            gradient_panel,
            gradient_heading: row(grad_inner, 0.0, 24.0),
            stop_fields: [
                Rect::new(grad_inner.x(), grad_inner.y() + 32.0, half, FIELD_H),
                Rect::new(grad_inner.x() + half + PANEL_PAD, grad_inner.y() + 32.0, half, FIELD_H),
            ],
            direction: Rect::new(grad_inner.x(), grad_inner.y() + 124.0, 220.0_f32.min(grad_inner.width()), 28.0),
            gradient_code_label: row(grad_inner, 160.0, 18.0),
            gradient_code: row(grad_inner, 180.0, CODE_H),
            gradient_preview: row(grad_inner, 220.0, 78.0),

            save_button: Rect::new(left, ROW2_TOP, BUTTON_W, BUTTON_H),
            reset_button: Rect::new(left + BUTTON_W + 8.0, ROW2_TOP, BUTTON_W, BUTTON_H),
            saved_heading: Rect::new(left, ROW2_TOP + 52.0, col_w, 24.0),
            saved_area: Rect::new(
                left,
                ROW2_TOP + 80.0,
                col_w,
                (size.y - MARGIN - (ROW2_TOP + 80.0)).max(0.0),
            ),

            pen_heading: Rect::new(right, ROW2_TOP, col_w, 24.0),
            pen_field: Rect::new(right, ROW2_TOP + 28.0, 200.0, FIELD_H),
            clear_button: Rect::new(right + 216.0, ROW2_TOP + 28.0, BUTTON_W, BUTTON_H),
            canvas: Rect::new(right, canvas_y, CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32),
        }
    }

    /// Swatch slots for `count` entries, row-major, skipping any that would
    /// spill out of [`saved_area`](Self::saved_area).
    pub fn swatch_rects(&self, count: usize) -> Vec<Rect> {
        swatch_rects(self.saved_area, count)
    }
}

/// Swatch slots inside `area`, wrapping into rows.
pub fn swatch_rects(area: Rect, count: usize) -> Vec<Rect> {
    let step = SWATCH_SIZE + SWATCH_GAP;
    let per_row = (((area.width() + SWATCH_GAP) / step).floor() as usize).max(1);

    (0..count)
        .map(|i| {
            let (col, line) = (i % per_row, i / per_row);
            Rect::new(
                area.x() + col as f32 * step,
                area.y() + line as f32 * step,
                SWATCH_SIZE,
                SWATCH_SIZE,
            )
        })
        .take_while(|r| area.contains_rect(*r))
        .collect()
}

fn panel_inner(panel: Rect) -> Rect {
    panel.inset(PANEL_PAD)
}

fn row(inner: Rect, dy: f32, h: f32) -> Rect {
    Rect::new(inner.x(), inner.y() + dy, inner.width(), h)
}
