//! Geometry shared by the canvas, the painter and the screen layout.
//!
//! All coordinates are logical pixels, origin top-left, +X right, +Y down.
//! Conversion to physical pixels happens once, in the painter transform.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
