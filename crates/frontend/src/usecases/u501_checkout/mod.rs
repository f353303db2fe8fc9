//! Оформление заказа
//!
//! - view_model.rs: поля формы (RwSignal для THAW) и команда отправки
//! - view.rs: диалог оформления (pure UI)

mod view;
mod view_model;

pub use view::CheckoutDialog;
pub use view_model::CheckoutVm;
