pub mod header;
pub mod mobile_menu;
pub mod nav;

pub use header::Header;
