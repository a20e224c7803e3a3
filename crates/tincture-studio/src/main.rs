use tincture_engine::logging::{LoggingConfig, init_logging};
use tincture_ui::Application;

fn main() {
    init_logging(LoggingConfig::default());

    let font = load_font();
    if font.is_empty() {
        log::warn!("no system font found, labels will be missing");
    }

    Application::new()
        .title("Color Picker Tool")
        .size(1000.0, 800.0)
        .font("body", font)
        .run();
}

/// First readable font from the usual system locations, or empty bytes.
fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\segoeui.ttf",
    ]
    .iter()
    .find_map(|p| {
        let bytes = std::fs::read(p).ok()?;
        log::debug!("using font {p}");
        Some(bytes)
    })
    .unwrap_or_default()
}
