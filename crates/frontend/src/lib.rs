pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod shared;
pub mod usecases;

use shared::config::StoreConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let loaded = shared::config::load_config();
    let level = loaded
        .as_ref()
        .map(|c| c.ui.log_level())
        .unwrap_or(log::Level::Debug);

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = loaded.unwrap_or_else(|e| {
        log::error!("Failed to parse bundled config, using defaults: {}", e);
        StoreConfig::default()
    });

    log::info!("{} storefront starting", config.store.name);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
