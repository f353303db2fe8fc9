//! Каталог товаров с фильтрами
//!
//! - view_model.rs: выбранные фильтры, применённый список, команды
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CatalogPage;
pub use view_model::CatalogVm;
