//! Freehand pen over a [`Canvas2d`].

use tincture_engine::canvas::{Canvas2d, LineCap, StrokeStyle};
use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::HexColor;

pub const PEN_WIDTH: f32 = 5.0;
pub const DEFAULT_PEN_COLOR: HexColor = HexColor::from_u32(0x3498db);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PenState {
    Idle,
    Drawing,
}

/// Pointer-driven stroke recorder.
///
/// Points are surface-local. While drawing, every move extends the open path
/// and strokes it.
pub struct PenTool<C: Canvas2d> {
    canvas: C,
    state: PenState,
    color: HexColor,
}

impl<C: Canvas2d> PenTool<C> {
    /// Takes ownership of an acquired surface and applies the pen style.
    pub fn new(canvas: C) -> Self {
        let mut tool = Self { canvas, state: PenState::Idle, color: DEFAULT_PEN_COLOR };
        tool.apply_style();
        tool
    }

    fn style(&self) -> StrokeStyle {
        StrokeStyle { width: PEN_WIDTH, cap: LineCap::Round, color: self.color }
    }

    fn apply_style(&mut self) {
        let style = self.style();
        style.apply(&mut self.canvas);
    }

    #[inline]
    pub fn state(&self) -> PenState {
        self.state
    }

    #[inline]
    pub fn color(&self) -> HexColor {
        self.color
    }

    #[inline]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Starts a new path at `point`. Restarts if already drawing.
    pub fn pointer_down(&mut self, point: Vec2) {
        self.canvas.begin_path();
        self.canvas.move_to(point);
        self.state = PenState::Drawing;
    }

    /// Extends and strokes the path while drawing; ignored when idle.
    pub fn pointer_move(&mut self, point: Vec2) {
        if self.state != PenState::Drawing {
            return;
        }
        self.canvas.line_to(point);
        self.canvas.stroke();
    }

    /// Ends the stroke; ignored when idle.
    pub fn pointer_up(&mut self) {
        if self.state != PenState::Drawing {
            return;
        }
        self.canvas.close_path();
        self.state = PenState::Idle;
    }

    /// Erases the whole surface without changing the pen state.
    ///
    /// The open path survives, so the next move in an ongoing stroke
    /// restrokes the segments drawn before the clear.
    pub fn clear(&mut self) {
        let size = self.canvas.size();
        self.canvas.clear_rect(Rect::new(0.0, 0.0, size.x, size.y));
        log::debug!("canvas cleared");
    }

    /// Stores `color` and re-applies the full stroke style at once.
    ///
    /// Takes effect on the next stroke, including within an ongoing one.
    pub fn set_pen_color(&mut self, color: HexColor) {
        self.color = color;
        self.apply_style();
        log::debug!("pen color -> {color}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_engine::canvas::PixmapCanvas;

    /// Records every canvas call.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        LineWidth(f32),
        LineCap(LineCap),
        StrokeColor(HexColor),
        BeginPath,
        MoveTo(Vec2),
        LineTo(Vec2),
        Stroke,
        ClosePath,
        ClearRect(Rect),
    }

    struct RecordingCanvas {
        size: Vec2,
        calls: Vec<Call>,
    }

    impl RecordingCanvas {
        fn new() -> Self {
            Self { size: Vec2::new(100.0, 50.0), calls: Vec::new() }
        }
    }

    impl Canvas2d for RecordingCanvas {
        fn size(&self) -> Vec2 {
            self.size
        }
        fn set_line_width(&mut self, width: f32) {
            self.calls.push(Call::LineWidth(width));
        }
        fn set_line_cap(&mut self, cap: LineCap) {
            self.calls.push(Call::LineCap(cap));
        }
        fn set_stroke_color(&mut self, color: HexColor) {
            self.calls.push(Call::StrokeColor(color));
        }
        fn begin_path(&mut self) {
            self.calls.push(Call::BeginPath);
        }
        fn move_to(&mut self, p: Vec2) {
            self.calls.push(Call::MoveTo(p));
        }
        fn line_to(&mut self, p: Vec2) {
            self.calls.push(Call::LineTo(p));
        }
        fn stroke(&mut self) {
            self.calls.push(Call::Stroke);
        }
        fn close_path(&mut self) {
            self.calls.push(Call::ClosePath);
        }
        fn clear_rect(&mut self, rect: Rect) {
            self.calls.push(Call::ClearRect(rect));
        }
    }

    fn tool() -> PenTool<RecordingCanvas> {
        let mut t = PenTool::new(RecordingCanvas::new());
        t.canvas.calls.clear();
        t
    }

    fn segments(calls: &[Call]) -> usize {
        calls.iter().filter(|c| matches!(c, Call::LineTo(_))).count()
    }

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[test]
    fn acquiring_applies_pen_style() {
        let t = PenTool::new(RecordingCanvas::new());
        assert_eq!(
            t.canvas().calls,
            vec![
                Call::LineWidth(5.0),
                Call::LineCap(LineCap::Round),
                Call::StrokeColor(DEFAULT_PEN_COLOR),
            ]
        );
    }

    #[test]
    fn pen_color_reapplies_full_style() {
        let mut t = tool();
        t.set_pen_color(HexColor::from_u32(0xff0000));
        assert_eq!(
            t.canvas().calls,
            vec![
                Call::LineWidth(5.0),
                Call::LineCap(LineCap::Round),
                Call::StrokeColor(HexColor::from_u32(0xff0000)),
            ]
        );
        assert_eq!(t.color(), HexColor::from_u32(0xff0000));
    }

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn down_move_up_draws_one_segment() {
        let mut t = tool();
        t.pointer_down(p(10.0, 10.0));
        t.pointer_move(p(20.0, 20.0));
        t.pointer_up();

        assert_eq!(
            t.canvas().calls,
            vec![
                Call::BeginPath,
                Call::MoveTo(p(10.0, 10.0)),
                Call::LineTo(p(20.0, 20.0)),
                Call::Stroke,
                Call::ClosePath,
            ]
        );
        assert_eq!(t.state(), PenState::Idle);
    }

    #[test]
    fn move_after_up_draws_nothing() {
        let mut t = tool();
        t.pointer_down(p(10.0, 10.0));
        t.pointer_move(p(20.0, 20.0));
        t.pointer_up();
        let before = t.canvas().calls.len();

        t.pointer_move(p(30.0, 30.0));
        assert_eq!(t.canvas().calls.len(), before);
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut t = tool();
        t.pointer_move(p(5.0, 5.0));
        assert!(t.canvas().calls.is_empty());
        assert_eq!(t.state(), PenState::Idle);
    }

    #[test]
    fn up_while_idle_is_ignored() {
        let mut t = tool();
        t.pointer_up();
        assert!(t.canvas().calls.is_empty());
    }

    #[test]
    fn every_move_strokes() {
        let mut t = tool();
        t.pointer_down(p(0.0, 0.0));
        for i in 1..=4 {
            t.pointer_move(p(i as f32, 0.0));
        }
        let calls = &t.canvas().calls;
        assert_eq!(segments(calls), 4);
        assert_eq!(calls.iter().filter(|c| **c == Call::Stroke).count(), 4);
    }

    #[test]
    fn second_down_starts_fresh_path() {
        let mut t = tool();
        t.pointer_down(p(1.0, 1.0));
        t.pointer_down(p(9.0, 9.0));
        assert_eq!(t.state(), PenState::Drawing);
        assert_eq!(&t.canvas().calls[2..], &[Call::BeginPath, Call::MoveTo(p(9.0, 9.0))]);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_covers_surface_and_keeps_state() {
        let mut t = tool();
        t.pointer_down(p(1.0, 1.0));
        t.clear();
        assert_eq!(t.state(), PenState::Drawing);
        assert_eq!(t.canvas().calls.last(), Some(&Call::ClearRect(Rect::new(0.0, 0.0, 100.0, 50.0))));
    }

    // ── pixels ────────────────────────────────────────────────────────────

    #[test]
    fn strokes_reach_the_pixmap() {
        let mut t = PenTool::new(PixmapCanvas::new(64, 64).unwrap());
        t.pointer_down(p(10.0, 10.0));
        t.pointer_move(p(20.0, 20.0));
        t.pointer_up();

        assert_eq!(t.canvas().opaque_color_at(15, 15), Some(DEFAULT_PEN_COLOR));
        // A later move with no new down leaves no trace.
        t.pointer_move(p(50.0, 50.0));
        assert_eq!(t.canvas().alpha_at(40, 40), 0);
    }

    #[test]
    fn clear_removes_prior_strokes_in_any_state() {
        let mut t = PenTool::new(PixmapCanvas::new(64, 64).unwrap());
        t.pointer_down(p(5.0, 5.0));
        t.pointer_move(p(60.0, 5.0));
        t.clear();
        assert_eq!(t.canvas().painted_pixels(), 0);

        t.pointer_up();
        t.pointer_down(p(5.0, 30.0));
        t.pointer_move(p(60.0, 30.0));
        t.pointer_up();
        t.clear();
        assert_eq!(t.canvas().painted_pixels(), 0);
    }

    #[test]
    fn move_after_mid_stroke_clear_redraws_open_path() {
        let mut t = PenTool::new(PixmapCanvas::new(64, 64).unwrap());
        t.pointer_down(p(5.0, 10.0));
        t.pointer_move(p(60.0, 10.0));
        t.clear();
        assert_eq!(t.canvas().painted_pixels(), 0);
        assert_eq!(t.state(), PenState::Drawing);

        t.pointer_move(p(60.0, 50.0));
        // Both the pre-clear segment and the new one are painted.
        assert!(t.canvas().alpha_at(30, 10) > 0);
        assert!(t.canvas().alpha_at(60, 30) > 0);
    }

    #[test]
    fn new_color_applies_mid_stroke() {
        let mut t = PenTool::new(PixmapCanvas::new(64, 64).unwrap());
        t.pointer_down(p(5.0, 10.0));
        t.pointer_move(p(30.0, 10.0));
        t.set_pen_color(HexColor::from_u32(0x00ff00));
        t.pointer_move(p(60.0, 10.0));

        // The restroke paints the whole open path in the new color.
        assert_eq!(t.canvas().opaque_color_at(15, 10), Some(HexColor::from_u32(0x00ff00)));
        assert_eq!(t.canvas().opaque_color_at(45, 10), Some(HexColor::from_u32(0x00ff00)));
    }
}
