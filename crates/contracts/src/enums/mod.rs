pub mod glow_color;
pub mod led_type;
pub mod section;

pub use glow_color::GlowColor;
pub use led_type::LedType;
pub use section::Section;
