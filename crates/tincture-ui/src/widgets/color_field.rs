use tincture_engine::coords::{Rect, Vec2};
use tincture_engine::paint::{Channel, HexColor, Paint};

use crate::action::ColorTarget;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::{Border, Painter};
use crate::theme;
use crate::widget::Widget;

const ROW_H: f32 = 28.0;
const SWATCH: f32 = 48.0;
const LABEL_W: f32 = 18.0;
const VALUE_W: f32 = 34.0;
const TRACK_H: f32 = 10.0;
const THUMB_R: f32 = 7.0;

/// Color input made of a swatch and one slider per RGB channel.
///
/// Any slider position maps to a valid byte, so the emitted color is always
/// a valid `#rrggbb`. Dragging emits on every move through
/// [`ColorTarget::action`].
pub struct ColorField {
    target: ColorTarget,
    color: HexColor,
    caption: Option<&'static str>,
    dragging: Option<Channel>,
}

impl ColorField {
    pub fn new(target: ColorTarget, color: HexColor) -> Self {
        Self { target, color, caption: None, dragging: None }
    }

    /// Short label drawn under the swatch.
    pub fn caption(mut self, text: &'static str) -> Self {
        self.caption = Some(text);
        self
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    /// Shows `color` without emitting anything.
    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    fn swatch_rect(rect: Rect) -> Rect {
        Rect::new(rect.x(), rect.y(), SWATCH, SWATCH)
    }

    /// Full row for `channel`: label, track and value readout.
    fn row_rect(rect: Rect, channel: Channel) -> Rect {
        let i = Channel::ALL.iter().position(|c| *c == channel).unwrap_or(0);
        let x = rect.x() + SWATCH + 12.0;
        Rect::new(x, rect.y() + i as f32 * ROW_H, (rect.right() - x).max(0.0), ROW_H)
    }

    pub(crate) fn track_rect(rect: Rect, channel: Channel) -> Rect {
        let row = Self::row_rect(rect, channel);
        Rect::new(
            row.x() + LABEL_W,
            row.y() + (ROW_H - TRACK_H) * 0.5,
            (row.width() - LABEL_W - VALUE_W).max(1.0),
            TRACK_H,
        )
    }

    fn channel_at(rect: Rect, pos: Vec2) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| {
            let row = Self::row_rect(rect, *c);
            // Label and readout are not part of the hit area.
            let track = Self::track_rect(rect, *c);
            row.contains(pos) && pos.x >= track.x() - THUMB_R && pos.x <= track.right() + THUMB_R
        })
    }

    fn value_at(track: Rect, x: f32) -> u8 {
        let t = ((x - track.x()) / track.width()).clamp(0.0, 1.0);
        (t * 255.0).round() as u8
    }

    fn drag_to(&mut self, rect: Rect, channel: Channel, x: f32, ctx: &mut EventCtx<'_>) {
        let value = Self::value_at(Self::track_rect(rect, channel), x);
        if value == self.color.channel(channel) {
            return;
        }
        self.color = self.color.with_channel(channel, value);
        ctx.emit(self.target.action(self.color));
    }
}

impl Widget for ColorField {
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let swatch = Self::swatch_rect(rect);
        painter.fill_rounded_rect(
            swatch,
            6.0,
            Paint::Solid(self.color),
            Some(Border::new(1.0, theme::PANEL_BORDER)),
        );
        if let Some(caption) = self.caption {
            let under = Rect::new(swatch.x(), swatch.bottom() + 4.0, swatch.width(), 18.0);
            painter.text_centered(caption, theme::SMALL_SIZE, theme::TEXT_MUTED, under);
        }

        for channel in Channel::ALL {
            let row = Self::row_rect(rect, channel);
            let track = Self::track_rect(rect, channel);
            let value = self.color.channel(channel);

            let label = Rect::new(row.x(), row.y(), LABEL_W, ROW_H);
            painter.text_in(channel.label(), theme::SMALL_SIZE, theme::TEXT_MUTED, label, 0.0);

            let ramp = Paint::Ramp(self.color.with_channel(channel, 0), self.color.with_channel(channel, 255));
            painter.fill_rounded_rect(track, TRACK_H * 0.5, ramp, Some(Border::new(1.0, theme::PANEL_BORDER)));

            let cx = track.x() + value as f32 / 255.0 * track.width();
            let active = self.dragging == Some(channel) || painter.is_hovered(row);
            let r = if active { THUMB_R + 1.5 } else { THUMB_R };
            painter.fill_circle(
                Vec2::new(cx, track.center().y),
                r,
                Paint::Solid(HexColor::WHITE),
                Some(Border::new(2.0, theme::ACCENT)),
            );

            let readout = Rect::new(row.right() - VALUE_W, row.y(), VALUE_W, ROW_H);
            painter.text_in(&value.to_string(), theme::SMALL_SIZE, theme::TEXT, readout, 4.0);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &mut EventCtx<'_>) -> EventResult {
        match *event {
            UiEvent::PointerDown { pos } => match Self::channel_at(rect, pos) {
                Some(channel) => {
                    self.dragging = Some(channel);
                    self.drag_to(rect, channel, pos.x, ctx);
                    EventResult::Consumed
                }
                None if rect.contains(pos) => EventResult::Consumed,
                None => EventResult::Ignored,
            },
            // Drags keep tracking outside the field until release.
            UiEvent::PointerMove { pos } => match self.dragging {
                Some(channel) => {
                    self.drag_to(rect, channel, pos.x, ctx);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::PointerUp { pos } => match self.dragging.take() {
                Some(channel) => {
                    self.drag_to(rect, channel, pos.x, ctx);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            UiEvent::KeyPress { .. } => EventResult::Ignored,
        }
    }

    fn tooltip(&self, rect: Rect, pos: Vec2) -> Option<String> {
        Self::swatch_rect(rect).contains(pos).then(|| self.color.to_string())
    }
}
