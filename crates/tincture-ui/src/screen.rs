//! The color picker screen: owns state, routes input, paints the frame.

use tincture_engine::canvas::{CanvasError, PixmapCanvas};
use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::input::{InputEvent, KeyState, MouseButton, MouseButtonState};
use tincture_engine::paint::{GradientDirection, HexColor, Paint};

use crate::action::{Action, ColorTarget};
use crate::clipboard::ClipboardWorker;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, MARGIN, ScreenLayout};
use crate::notify::{ToastKind, Toasts};
use crate::painter::{Border, Painter};
use crate::pen::{PenState, PenTool};
use crate::picker::{GradientStop, PickerState};
use crate::theme;
use crate::widget::Widget;
use crate::widgets::{Button, CodeField, ColorField, DirectionSelect, Preview, SwatchList};

pub const TITLE: &str = "Color Picker Tool";
pub const SUBTITLE: &str = "Pick solid or gradient colors, save them, and copy the color code instantly! \
You can also draw with the pen tool.";

/// Everything on screen plus the state it edits.
///
/// Widgets push [`Action`]s while an event is routed; the queue is applied
/// once routing finishes, so no widget ever mutates state directly.
pub struct ColorPickerScreen {
    layout: ScreenLayout,
    state: PickerState,
    pen: PenTool<PixmapCanvas>,
    clipboard: ClipboardWorker,
    toasts: Toasts,
    actions: Vec<Action>,

    solid_field: ColorField,
    stop_fields: [ColorField; 2],
    pen_field: ColorField,
    direction: DirectionSelect,
    solid_code: CodeField,
    gradient_code: CodeField,
    solid_preview: Preview,
    gradient_preview: Preview,
    save_button: Button,
    reset_button: Button,
    clear_button: Button,
    swatches: SwatchList,
}

impl ColorPickerScreen {
    /// Builds the screen for a window of `size` logical pixels.
    pub fn new(size: Vec2, clipboard: ClipboardWorker) -> Result<Self, CanvasError> {
        let state = PickerState::new();
        let pen = PenTool::new(PixmapCanvas::new(CANVAS_WIDTH, CANVAS_HEIGHT)?);
        let gradient = state.gradient();

        Ok(Self {
            layout: ScreenLayout::new(size),
            solid_field: ColorField::new(ColorTarget::Solid, state.solid()),
            stop_fields: [
                ColorField::new(ColorTarget::Stop(GradientStop::First), gradient.color1)
                    .caption(GradientStop::First.label()),
                ColorField::new(ColorTarget::Stop(GradientStop::Second), gradient.color2)
                    .caption(GradientStop::Second.label()),
            ],
            pen_field: ColorField::new(ColorTarget::Pen, pen.color()),
            direction: DirectionSelect::new(gradient.direction),
            solid_code: CodeField::new(state.solid_css()),
            gradient_code: CodeField::new(state.gradient_css()),
            solid_preview: Preview::new(state.solid(), state.solid_css()),
            gradient_preview: Preview::new(gradient, state.gradient_css()),
            save_button: Button::new("Save Color", Action::Save)
                .background(theme::SAVE_BUTTON)
                .hover_background(theme::SAVE_BUTTON_HOVER),
            reset_button: Button::new("Reset", Action::Reset)
                .background(theme::RESET_BUTTON)
                .hover_background(theme::RESET_BUTTON_HOVER),
            clear_button: Button::new("Clear Canvas", Action::ClearCanvas),
            swatches: SwatchList::new(),
            state,
            pen,
            clipboard,
            toasts: Toasts::new(),
            actions: Vec::new(),
        })
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn pen(&self) -> &PenTool<PixmapCanvas> {
        &self.pen
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Direction shown by the dropdown.
    pub fn selected_direction(&self) -> GradientDirection {
        self.direction.selected()
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Feeds one engine input event. Returns whether something used it.
    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        let ui = match *event {
            InputEvent::PointerMoved(pos) => UiEvent::PointerMove { pos },
            InputEvent::PointerButton(b) if b.button == MouseButton::Left => match b.state {
                MouseButtonState::Pressed => UiEvent::PointerDown { pos: b.pos },
                MouseButtonState::Released => UiEvent::PointerUp { pos: b.pos },
            },
            InputEvent::Key { key, state: KeyState::Pressed, .. } => UiEvent::KeyPress { key },
            InputEvent::PointerLeft | InputEvent::Focused(false) => {
                self.end_stroke();
                return EventResult::Ignored;
            }
            _ => return EventResult::Ignored,
        };
        self.handle_event(&ui)
    }

    /// Routes `event` to the pen and the widgets, then applies the actions
    /// they queued.
    pub fn handle_event(&mut self, event: &UiEvent) -> EventResult {
        // A release anywhere ends the stroke; the widgets still see it.
        if let UiEvent::PointerUp { .. } = event {
            self.end_stroke();
        }

        let mut result = self.route_to_widgets(event);
        if !result.is_consumed() {
            result = self.route_to_canvas(event);
        }
        self.apply_actions();
        result
    }

    fn route_to_widgets(&mut self, event: &UiEvent) -> EventResult {
        let l = self.layout;
        let mut ctx = EventCtx::new(&mut self.actions);

        // The open dropdown sits above everything else.
        if self.direction.is_open() {
            return self.direction.on_event(event, l.direction, &mut ctx);
        }

        let [stop1, stop2] = &mut self.stop_fields;
        let widgets: [(&mut dyn Widget, Rect); 12] = [
            (&mut self.solid_field, l.solid_field),
            (stop1, l.stop_fields[0]),
            (stop2, l.stop_fields[1]),
            (&mut self.pen_field, l.pen_field),
            (&mut self.direction, l.direction),
            (&mut self.solid_code, l.solid_code),
            (&mut self.gradient_code, l.gradient_code),
            (&mut self.save_button, l.save_button),
            (&mut self.reset_button, l.reset_button),
            (&mut self.clear_button, l.clear_button),
            (&mut self.solid_preview, l.solid_preview),
            (&mut self.gradient_preview, l.gradient_preview),
        ];

        // Releases go to every widget so drags and armed buttons reset.
        let broadcast = matches!(event, UiEvent::PointerUp { .. });
        let mut result = EventResult::Ignored;
        for (widget, rect) in widgets {
            if widget.on_event(event, rect, &mut ctx).is_consumed() {
                result = EventResult::Consumed;
                if !broadcast {
                    break;
                }
            }
        }
        result
    }

    fn route_to_canvas(&mut self, event: &UiEvent) -> EventResult {
        let canvas = self.layout.canvas;
        match *event {
            UiEvent::PointerDown { pos } if canvas.contains(pos) => {
                self.pen.pointer_down(canvas.to_local(pos));
                EventResult::Consumed
            }
            UiEvent::PointerMove { pos } if canvas.contains(pos) && self.pen.state() == PenState::Drawing => {
                self.pen.pointer_move(canvas.to_local(pos));
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn end_stroke(&mut self) {
        self.pen.pointer_up();
    }

    fn apply_actions(&mut self) {
        let actions = std::mem::take(&mut self.actions);
        for action in actions {
            match action {
                Action::SetSolid(c) => self.state.set_solid_color(c),
                Action::SetGradientStop(which, c) => self.state.set_gradient_stop(which, c),
                Action::SetDirection(d) => self.state.set_gradient_direction(d),
                Action::SetPenColor(c) => self.pen.set_pen_color(c),
                Action::Save => self.state.save(),
                Action::Reset => self.state.reset(),
                Action::ClearCanvas => self.pen.clear(),
                Action::Copy(text) => self.copy_to_clipboard(text),
            }
        }
        self.sync_widgets();
    }

    /// Hands `text` to the clipboard worker. The outcome arrives as a toast
    /// through [`update`](Self::update).
    pub fn copy_to_clipboard(&mut self, text: String) {
        log::debug!("copy requested: {text}");
        if let Some(outcome) = self.clipboard.request(text) {
            self.toasts.push_copy_outcome(&outcome);
        }
    }

    /// Per-frame housekeeping: collects clipboard results and ages toasts.
    pub fn update(&mut self, dt: f32) {
        for outcome in self.clipboard.poll() {
            self.toasts.push_copy_outcome(&outcome);
        }
        self.toasts.tick(dt);
    }

    /// True while a slider or the pen holds the pointer.
    pub fn is_dragging(&self) -> bool {
        self.pen.state() == PenState::Drawing
            || self.solid_field.is_dragging()
            || self.pen_field.is_dragging()
            || self.stop_fields.iter().any(ColorField::is_dragging)
    }

    // ── paint ─────────────────────────────────────────────────────────────

    /// Pushes current state into the widgets.
    fn sync_widgets(&mut self) {
        let solid = self.state.solid();
        let gradient = self.state.gradient();

        self.solid_field.set_color(solid);
        self.stop_fields[0].set_color(gradient.color1);
        self.stop_fields[1].set_color(gradient.color2);
        self.pen_field.set_color(self.pen.color());
        self.direction.set_selected(gradient.direction);
        self.solid_code.set_text(self.state.solid_css());
        self.gradient_code.set_text(self.state.gradient_css());
        self.solid_preview.set(solid, self.state.solid_css());
        self.gradient_preview.set(gradient, self.state.gradient_css());
        self.swatches.set_entries(self.state.saved());
    }

    pub fn paint(&mut self, painter: &mut Painter) {
        self.sync_widgets();
        let l = self.layout;

        painter.clear(theme::BACKGROUND);
        painter.text(TITLE, theme::TITLE_SIZE, theme::TEXT, l.title.origin, None);
        painter.text(SUBTITLE, theme::SUBTITLE_SIZE, theme::TEXT_MUTED, l.subtitle.origin, Some(l.subtitle.width()));

        // ── color panels ──
        for panel in [l.solid_panel, l.gradient_panel] {
            painter.fill_rounded_rect(panel, theme::CORNER_RADIUS, theme::PANEL, Some(Border::new(1.0, theme::PANEL_BORDER)));
        }
        heading(painter, "Solid Color", l.solid_heading);
        self.solid_field.paint(painter, l.solid_field);
        label(painter, "Color Code:", l.solid_code_label);
        self.solid_code.paint(painter, l.solid_code);
        self.solid_preview.paint(painter, l.solid_preview);

        heading(painter, "Gradient Color", l.gradient_heading);
        self.stop_fields[0].paint(painter, l.stop_fields[0]);
        self.stop_fields[1].paint(painter, l.stop_fields[1]);
        self.direction.paint(painter, l.direction);
        label(painter, "Gradient Code:", l.gradient_code_label);
        self.gradient_code.paint(painter, l.gradient_code);
        self.gradient_preview.paint(painter, l.gradient_preview);

        // ── actions and saved colors ──
        self.save_button.paint(painter, l.save_button);
        self.reset_button.paint(painter, l.reset_button);
        if !self.swatches.is_empty() {
            heading(painter, "Saved Colors:", l.saved_heading);
            self.swatches.paint(painter, l.saved_area);
        }

        // ── pen tool ──
        heading(painter, "Pen Tool", l.pen_heading);
        self.pen_field.paint(painter, l.pen_field);
        self.clear_button.paint(painter, l.clear_button);
        painter.fill_rect(l.canvas, HexColor::WHITE);
        painter.draw_pixmap(self.pen.canvas().pixmap(), l.canvas);
        painter.stroke_rounded_rect(l.canvas, 2.0, Border::new(1.0, theme::PANEL_BORDER));

        self.direction.paint_overlay(painter, l.direction);

        if let Some(hint) = self.tooltip_at(painter.mouse_pos) {
            painter.tooltip(&hint);
        }
        self.paint_toasts(painter);
    }

    /// Hover hint for the pointer, if any. Suppressed during drags and while
    /// the dropdown is open.
    pub fn tooltip_at(&self, pos: Option<Vec2>) -> Option<String> {
        let pos = pos?;
        if self.direction.is_open() || self.is_dragging() {
            return None;
        }
        let l = &self.layout;
        let widgets: [(&dyn Widget, Rect); 7] = [
            (&self.solid_code, l.solid_code),
            (&self.gradient_code, l.gradient_code),
            (&self.solid_preview, l.solid_preview),
            (&self.gradient_preview, l.gradient_preview),
            (&self.solid_field, l.solid_field),
            (&self.stop_fields[0], l.stop_fields[0]),
            (&self.stop_fields[1], l.stop_fields[1]),
        ];
        widgets
            .into_iter()
            .find_map(|(w, r)| w.tooltip(r, pos))
            .or_else(|| self.swatches.tooltip(l.saved_area, pos))
    }

    fn paint_toasts(&self, painter: &mut Painter) {
        const W: f32 = 340.0;
        const H: f32 = 36.0;
        let x = self.layout.size.x - MARGIN - W;
        for (i, toast) in self.toasts.iter().enumerate() {
            let rect = Rect::new(x, 16.0 + i as f32 * (H + 8.0), W, H);
            let bg = match toast.kind {
                ToastKind::Info => theme::TOAST_INFO,
                ToastKind::Error => theme::TOAST_ERROR,
            };
            // Fade out over the last half second.
            let alpha = (toast.remaining / 0.5).clamp(0.0, 1.0);
            painter.fill_rounded_rect(rect, 6.0, Paint::Translucent(bg, (alpha * 235.0) as u8), None);
            painter.text_in(&toast.message, theme::BODY_SIZE, HexColor::WHITE, rect, 12.0);
        }
    }
}

fn heading(painter: &mut Painter, text: &str, rect: Rect) {
    painter.text_in(text, theme::HEADING_SIZE, theme::TEXT, rect, 0.0);
}

fn label(painter: &mut Painter, text: &str, rect: Rect) {
    painter.text_in(text, theme::SMALL_SIZE, theme::TEXT_MUTED, rect, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use tincture_engine::input::{Key, PointerButtonEvent};
    use tincture_engine::paint::Channel;
    use tincture_engine::text::{FontSystem, TextRasterizer};
    use tiny_skia::Pixmap;

    use crate::clipboard::{ClipboardError, ClipboardSink};

    struct FakeSink {
        deny: bool,
    }

    impl ClipboardSink for FakeSink {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            if self.deny { Err(ClipboardError("denied".into())) } else { Ok(()) }
        }
    }

    fn screen_with(deny: bool) -> ColorPickerScreen {
        let worker = ClipboardWorker::spawn(move || Ok(FakeSink { deny }));
        ColorPickerScreen::new(Vec2::new(1000.0, 800.0), worker).unwrap()
    }

    fn screen() -> ColorPickerScreen {
        screen_with(false)
    }

    fn click(s: &mut ColorPickerScreen, pos: Vec2) {
        s.handle_event(&UiEvent::PointerDown { pos });
        s.handle_event(&UiEvent::PointerUp { pos });
    }

    fn button(pos: Vec2, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, pos })
    }

    fn wait_for_toast(s: &mut ColorPickerScreen) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while s.toasts().is_empty() && Instant::now() < deadline {
            s.update(0.0);
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    // ── picker actions ────────────────────────────────────────────────────

    #[test]
    fn save_and_reset_buttons() {
        let mut s = screen();
        let l = *s.layout();
        s.handle_event(&UiEvent::PointerDown { pos: ColorField::track_rect(l.solid_field, Channel::Red).center() });
        s.handle_event(&UiEvent::PointerUp { pos: Vec2::new(0.0, 0.0) });
        assert_ne!(s.state().solid(), crate::picker::DEFAULT_SOLID);

        click(&mut s, l.save_button.center());
        assert_eq!(s.state().saved().len(), 1);
        assert_eq!(s.state().saved()[0].solid, s.state().solid());

        click(&mut s, l.reset_button.center());
        assert_eq!(s.state().solid_css(), "#3498db");
        assert_eq!(s.state().saved().len(), 1);
    }

    #[test]
    fn slider_drag_updates_solid_color() {
        let mut s = screen();
        let track = ColorField::track_rect(s.layout().solid_field, Channel::Green);
        s.handle_event(&UiEvent::PointerDown { pos: Vec2::new(track.x(), track.center().y) });
        s.handle_event(&UiEvent::PointerMove { pos: Vec2::new(track.right() + 50.0, 0.0) });
        assert_eq!(s.state().solid().g, 255);
        s.handle_event(&UiEvent::PointerUp { pos: Vec2::new(track.right() + 50.0, 0.0) });
        assert!(!s.is_dragging());
    }

    #[test]
    fn direction_dropdown_changes_only_direction() {
        let mut s = screen();
        let l = *s.layout();
        let before = s.state().gradient();

        click(&mut s, l.direction.center());
        // Index 2 is top to bottom.
        s.handle_event(&UiEvent::PointerDown { pos: DirectionSelect::option_rect(l.direction, 2).center() });

        let after = s.state().gradient();
        assert_eq!(after.direction, GradientDirection::ToBottom);
        assert_eq!(s.selected_direction(), GradientDirection::ToBottom);
        assert_eq!((after.color1, after.color2), (before.color1, before.color2));
        assert_eq!(s.state().gradient_css(), "linear-gradient(to bottom, #ff6a00, #ee0979)");
    }

    #[test]
    fn escape_is_consumed_only_by_open_dropdown() {
        let mut s = screen();
        let esc = UiEvent::KeyPress { key: Key::Escape };
        assert!(!s.handle_event(&esc).is_consumed());

        let target = s.layout().direction.center();
        click(&mut s, target);
        assert!(s.handle_event(&esc).is_consumed());
        assert!(!s.handle_event(&esc).is_consumed());
    }

    // ── clipboard ─────────────────────────────────────────────────────────

    #[test]
    fn code_click_copies_and_toasts() {
        let mut s = screen();
        let target = s.layout().gradient_code.center();
        click(&mut s, target);
        wait_for_toast(&mut s);

        let toast = s.toasts().iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, "Copied to clipboard: linear-gradient(to right, #ff6a00, #ee0979)");

        s.update(3.0);
        assert!(s.toasts().is_empty());
    }

    #[test]
    fn denied_clipboard_shows_error_toast() {
        let mut s = screen_with(true);
        let target = s.layout().solid_code.center();
        click(&mut s, target);
        wait_for_toast(&mut s);

        let toast = s.toasts().iter().next().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Copy failed: denied");
    }

    // ── pen routing ───────────────────────────────────────────────────────

    #[test]
    fn drawing_inside_canvas_paints() {
        let mut s = screen();
        let c = s.layout().canvas;
        let a = c.origin + Vec2::new(10.0, 10.0);
        let b = c.origin + Vec2::new(60.0, 40.0);

        s.handle_input(&button(a, MouseButtonState::Pressed));
        assert_eq!(s.pen().state(), PenState::Drawing);
        s.handle_input(&InputEvent::PointerMoved(b));
        s.handle_input(&button(b, MouseButtonState::Released));
        assert_eq!(s.pen().state(), PenState::Idle);

        let painted = s.pen().canvas().painted_pixels();
        assert!(painted > 0);
        assert!(s.pen().canvas().alpha_at(35, 25) > 0);

        // Moving without a press draws nothing more.
        s.handle_input(&InputEvent::PointerMoved(c.origin + Vec2::new(200.0, 150.0)));
        assert_eq!(s.pen().canvas().painted_pixels(), painted);
    }

    #[test]
    fn release_outside_or_leaving_ends_stroke() {
        let mut s = screen();
        let c = s.layout().canvas;

        s.handle_input(&button(c.center(), MouseButtonState::Pressed));
        s.handle_input(&button(Vec2::new(5.0, 5.0), MouseButtonState::Released));
        assert_eq!(s.pen().state(), PenState::Idle);

        s.handle_input(&button(c.center(), MouseButtonState::Pressed));
        s.handle_input(&InputEvent::PointerLeft);
        assert_eq!(s.pen().state(), PenState::Idle);
    }

    #[test]
    fn clear_button_wipes_canvas() {
        let mut s = screen();
        let c = s.layout().canvas;
        s.handle_event(&UiEvent::PointerDown { pos: c.origin + Vec2::new(20.0, 20.0) });
        s.handle_event(&UiEvent::PointerMove { pos: c.origin + Vec2::new(80.0, 20.0) });
        s.handle_event(&UiEvent::PointerUp { pos: c.origin + Vec2::new(80.0, 20.0) });
        assert!(s.pen().canvas().painted_pixels() > 0);

        let target = s.layout().clear_button.center();
        click(&mut s, target);
        assert_eq!(s.pen().canvas().painted_pixels(), 0);
    }

    #[test]
    fn pen_field_sets_pen_color() {
        let mut s = screen();
        let track = ColorField::track_rect(s.layout().pen_field, Channel::Red);
        s.handle_event(&UiEvent::PointerDown { pos: Vec2::new(track.right(), track.center().y) });
        s.handle_event(&UiEvent::PointerUp { pos: Vec2::new(track.right(), track.center().y) });
        assert_eq!(s.pen().color().r, 255);
        assert_eq!(s.pen().canvas().style().color, s.pen().color());
    }

    // ── hover / paint ─────────────────────────────────────────────────────

    #[test]
    fn tooltips_follow_the_pointer() {
        let mut s = screen();
        let l = *s.layout();
        assert_eq!(s.tooltip_at(Some(l.solid_code.center())).as_deref(), Some("Click to copy!"));
        assert_eq!(s.tooltip_at(Some(l.solid_preview.center())).as_deref(), Some("#3498db"));
        assert_eq!(s.tooltip_at(Some(l.canvas.center())), None);
        assert_eq!(s.tooltip_at(None), None);

        click(&mut s, l.save_button.center());
        let first = l.swatch_rects(1)[0];
        assert_eq!(
            s.tooltip_at(Some(first.center())).as_deref(),
            Some("Gradient: to right, #ff6a00, #ee0979"),
        );
    }

    #[test]
    fn paint_fills_background_and_canvas() {
        let mut s = screen();
        let mut pm = Pixmap::new(1000, 800).unwrap();
        let fonts = FontSystem::new();
        let mut raster = TextRasterizer::new();
        s.paint(&mut Painter::new(&mut pm, &fonts, &mut raster, None, 1.0));

        let bg = pm.pixel(2, 790).unwrap();
        assert_eq!((bg.red(), bg.green(), bg.blue()), (0xf4, 0xf6, 0xfb));
        let c = s.layout().canvas.center();
        let px = pm.pixel(c.x as u32, c.y as u32).unwrap();
        assert_eq!((px.red(), px.green(), px.blue()), (255, 255, 255));
    }
}
