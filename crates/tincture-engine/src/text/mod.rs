mod font_system;
mod raster;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use raster::{TextRasterizer, TextRun};
