pub mod card_animated;
pub mod filter_panel;
pub mod ui;

pub use card_animated::CardAnimated;
pub use filter_panel::{FilterPanel, FilterTag};
