pub mod checkbox;
pub mod text_field;

pub use checkbox::Checkbox;
pub use text_field::TextField;
