use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a `#rgb` / `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

/// One of the three channels of a [`HexColor`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label shown next to channel sliders.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// Opaque sRGB color with 8-bit channels.
///
/// This is the value type the picker works in: what the user picks, what is
/// saved, what is copied as `#rrggbb`. Conversion to the rasterizer's color
/// type happens only at paint time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: (v & 0xff) as u8,
        }
    }

    pub const BLACK: HexColor = HexColor::rgb(0, 0, 0);
    pub const WHITE: HexColor = HexColor::rgb(255, 255, 255);

    #[inline]
    pub fn channel(self, c: Channel) -> u8 {
        match c {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Returns a copy with one channel replaced.
    #[inline]
    pub fn with_channel(self, c: Channel, v: u8) -> Self {
        let mut out = self;
        match c {
            Channel::Red => out.r = v,
            Channel::Green => out.g = v,
            Channel::Blue => out.b = v,
        }
        out
    }

    #[inline]
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }

    /// Same color with the given straight alpha, for overlays and shadows.
    #[inline]
    pub fn to_skia_alpha(self, a: u8) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    /// Accepts `#rgb` and `#rrggbb`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        match digits.len() {
            3 => {
                let v = u16::from_str_radix(digits, 16).map_err(|_| err())?;
                let expand = |n: u16| (n as u8 & 0x0f) * 0x11;
                Ok(HexColor::rgb(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            6 => {
                let v = u32::from_str_radix(digits, 16).map_err(|_| err())?;
                Ok(HexColor::from_u32(v))
            }
            _ => Err(err()),
        }
    }
}
