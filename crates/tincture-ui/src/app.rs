use anyhow::Context;
use tiny_skia::Pixmap;
use winit::dpi::LogicalSize;
use winit::window::CursorIcon;

use tincture_engine::coords::Vec2;
use tincture_engine::core::{App as EngineApp, AppControl, FrameCtx};
use tincture_engine::device::GpuInit;
use tincture_engine::input::{InputEvent, Key, KeyState, MouseButton};
use tincture_engine::text::{FontId, FontSystem, TextRasterizer};
use tincture_engine::window::{Runtime, RuntimeConfig};

use crate::clipboard::ClipboardWorker;
use crate::painter::Painter;
use crate::screen::{ColorPickerScreen, TITLE};

// ── Application ───────────────────────────────────────────────────────────

/// Top-level builder for the color picker window.
///
/// ```rust,ignore
/// Application::new()
///     .title("Color Picker Tool")
///     .size(1000.0, 800.0)
///     .font("body", load_font())
///     .run();
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    fonts: Vec<(String, Vec<u8>)>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: TITLE.to_string(),
            width: 1000.0,
            height: 800.0,
            fonts: Vec::new(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the window size in logical pixels. The window is not resizable.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Register a named font.
    ///
    /// The first one whose bytes load successfully is used for all text.
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Opens the window and runs until it closes.
    ///
    /// This never returns. A fatal error is logged and exits with status 1.
    pub fn run(self) -> ! {
        match self.try_run() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                log::error!("tincture runtime error: {e:#}");
                std::process::exit(1);
            }
        }
    }

    /// Like [`run`](Self::run) but returns the error instead of exiting.
    pub fn try_run(self) -> anyhow::Result<()> {
        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
            resizable: false,
        };
        let state = UiAppState::new(self).context("failed to build the picker screen")?;
        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements `tincture_engine::core::App`; user code never sees it.
struct UiAppState {
    fonts: FontSystem,
    font: Option<FontId>,
    raster: TextRasterizer,
    screen: ColorPickerScreen,
    /// CPU frame, reused while the surface size holds.
    frame: Option<Pixmap>,
}

impl UiAppState {
    fn new(app: Application) -> anyhow::Result<Self> {
        let (fonts, font) = load_fonts(&app.fonts);
        let size = Vec2::new(app.width as f32, app.height as f32);
        let screen = ColorPickerScreen::new(size, ClipboardWorker::system())?;
        Ok(Self { fonts, font, raster: TextRasterizer::new(), screen, frame: None })
    }
}

fn load_fonts(named: &[(String, Vec<u8>)]) -> (FontSystem, Option<FontId>) {
    let mut fonts = FontSystem::new();
    let mut first = None;
    for (name, bytes) in named {
        match fonts.load_font(bytes) {
            Ok(id) => {
                log::debug!("loaded font '{name}'");
                first.get_or_insert(id);
            }
            Err(e) => log::warn!("failed to load font '{name}': {e}"),
        }
    }
    if first.is_none() {
        log::warn!("no usable font; text will not be drawn");
    }
    (fonts, first)
}

fn is_escape(ev: &InputEvent) -> bool {
    matches!(ev, InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, .. })
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // ── Route input in arrival order ──────────────────────────────────
        for ev in &ctx.input_frame.events {
            let used = self.screen.handle_input(ev).is_consumed();
            if !used && is_escape(ev) {
                log::info!("escape pressed, closing");
                return AppControl::Exit;
            }
        }
        self.screen.update(ctx.time.dt);

        let pointer = ctx.input.pointer_pos;
        let over_canvas = pointer.is_some_and(|p| self.screen.layout().canvas.contains(p));
        ctx.window.set_cursor(if over_canvas { CursorIcon::Crosshair } else { CursorIcon::Default });

        // ── Paint ─────────────────────────────────────────────────────────
        let (w, h) = ctx.surface_size();
        let stale = self.frame.as_ref().is_none_or(|p| p.width() != w || p.height() != h);
        if stale {
            log::debug!("frame buffer {w}x{h}");
            self.frame = Pixmap::new(w, h);
        }
        let Some(pixmap) = self.frame.as_mut() else {
            return AppControl::Continue;
        };

        let mut painter = Painter::new(pixmap, &self.fonts, &mut self.raster, self.font, ctx.window.scale_factor())
            .with_pointer(pointer, ctx.input.button_down(MouseButton::Left));
        self.screen.paint(&mut painter);
        drop(painter);

        ctx.present(pixmap)
    }
}
