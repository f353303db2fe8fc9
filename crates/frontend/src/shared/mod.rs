pub mod components;
pub mod config;
pub mod icons;
pub mod number_format;
pub mod sheet;
pub mod toast;
