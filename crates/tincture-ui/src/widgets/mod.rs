pub mod button;
pub mod code_field;
pub mod color_field;
pub mod direction_select;
pub mod preview;
pub mod swatch_list;

pub use button::Button;
pub use code_field::CodeField;
pub use color_field::ColorField;
pub use direction_select::DirectionSelect;
pub use preview::Preview;
pub use swatch_list::SwatchList;
