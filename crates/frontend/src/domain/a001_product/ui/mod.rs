pub mod card;
pub mod catalog;

pub use card::ProductCard;
pub use catalog::{CatalogPage, CatalogVm};
