//! Colors and type sizes of the picker screen.

use tincture_engine::paint::HexColor;

pub const BACKGROUND: HexColor = HexColor::from_u32(0xf4f6fb);
pub const PANEL: HexColor = HexColor::from_u32(0xffffff);
pub const PANEL_BORDER: HexColor = HexColor::from_u32(0xdde3ee);
pub const TEXT: HexColor = HexColor::from_u32(0x2c3e50);
pub const TEXT_MUTED: HexColor = HexColor::from_u32(0x6b7a8f);
pub const ACCENT: HexColor = HexColor::from_u32(0x3498db);

pub const FIELD: HexColor = HexColor::from_u32(0xf7f9fc);
pub const FIELD_HOVER: HexColor = HexColor::from_u32(0xeaf3fb);

pub const SAVE_BUTTON: HexColor = HexColor::from_u32(0x27ae60);
pub const SAVE_BUTTON_HOVER: HexColor = HexColor::from_u32(0x2ecc71);
pub const RESET_BUTTON: HexColor = HexColor::from_u32(0xe74c3c);
pub const RESET_BUTTON_HOVER: HexColor = HexColor::from_u32(0xff6b5b);
pub const NEUTRAL_BUTTON: HexColor = HexColor::from_u32(0x7f8c8d);
pub const NEUTRAL_BUTTON_HOVER: HexColor = HexColor::from_u32(0x95a5a6);

pub const TOOLTIP: HexColor = HexColor::from_u32(0x2c3e50);
pub const TOAST_INFO: HexColor = HexColor::from_u32(0x2c3e50);
pub const TOAST_ERROR: HexColor = HexColor::from_u32(0xc0392b);

pub const CORNER_RADIUS: f32 = 8.0;

pub const TITLE_SIZE: f32 = 26.0;
pub const SUBTITLE_SIZE: f32 = 14.0;
pub const HEADING_SIZE: f32 = 18.0;
pub const BODY_SIZE: f32 = 14.0;
pub const SMALL_SIZE: f32 = 12.0;
