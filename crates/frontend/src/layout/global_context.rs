use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_cart::Cart;
use contracts::enums::Section;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const SECTION_PARAM: &str = "section";

/// Состояние витрины на время сессии: активный раздел, корзина и
/// видимость выезжающих панелей.
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub section: RwSignal<Section>,
    pub cart: RwSignal<Cart>,
    pub mobile_menu_open: RwSignal<bool>,
    pub cart_open: RwSignal<bool>,
    pub checkout_open: RwSignal<bool>,
}

impl StoreContext {
    pub fn new() -> Self {
        Self {
            section: RwSignal::new(Section::Home),
            cart: RwSignal::new(Cart::new()),
            mobile_menu_open: RwSignal::new(false),
            cart_open: RwSignal::new(false),
            checkout_open: RwSignal::new(false),
        }
    }

    /// Синхронизация раздела с `?section=...` в адресной строке
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(section) = section_from_query(&search) {
            self.section.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = section_query(this.section.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, section: Section) {
        log::debug!("navigate: {}", section.code());
        self.section.set(section);
        self.mobile_menu_open.set(false);
    }

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.update(|cart| cart.add(product.clone()));
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        self.cart.update(|cart| {
            cart.remove_first(id);
        });
    }

    pub fn cart_len(&self) -> usize {
        self.cart.with(Cart::len)
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.with(Cart::total_price)
    }

    /// Закрыть корзину и открыть диалог оформления
    pub fn open_checkout(&self) {
        self.cart_open.set(false);
        self.checkout_open.set(true);
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_store() -> StoreContext {
    use_context::<StoreContext>().expect("StoreContext not found")
}

/// Раздел из строки запроса (`?section=catalog`); неизвестный код игнорируется
pub fn section_from_query(search: &str) -> Option<Section> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(SECTION_PARAM)
        .and_then(|code| Section::from_code(code))
}

pub fn section_query(section: Section) -> String {
    let query = serde_qs::to_string(&HashMap::from([(
        SECTION_PARAM.to_string(),
        section.code().to_string(),
    )]))
    .unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_query() {
        assert_eq!(section_from_query("?section=catalog"), Some(Section::Catalog));
        assert_eq!(section_from_query("section=blog&x=1"), Some(Section::Blog));
    }

    #[test]
    fn test_unknown_or_missing_section_ignored() {
        assert_eq!(section_from_query("?section=admin"), None);
        assert_eq!(section_from_query(""), None);
        assert_eq!(section_from_query("?active=home"), None);
    }

    #[test]
    fn test_section_query_roundtrip() {
        for section in Section::all() {
            assert_eq!(section_from_query(&section_query(section)), Some(section));
        }
        assert_eq!(section_query(Section::Delivery), "?section=delivery");
    }
}
