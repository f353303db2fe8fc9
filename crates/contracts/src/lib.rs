//! Доменная модель витрины LED Store.
//!
//! Крейт не зависит от DOM и wasm: каталог, фильтры, корзина и оформление
//! заказа описаны чистыми типами и функциями, которые фронтенд только
//! оборачивает в сигналы.

pub mod domain;
pub mod enums;
pub mod shared;
