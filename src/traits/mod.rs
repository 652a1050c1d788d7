mod font_type;
mod render;

pub use font_type::FontType;
pub use render::Render;
