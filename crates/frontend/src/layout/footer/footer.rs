use crate::shared::config::StoreConfig;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let copyright = format!(
        "© {} {}. Все права защищены.",
        config.store.copyright_year, config.store.name
    );

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__content container">
                <div class="brand">
                    <span class="brand__icon">{icon_sized("lightbulb", 24)}</span>
                    <span class="brand__title brand__title--small">{config.store.name.clone()}</span>
                </div>
                <p class="footer__copyright">{copyright}</p>
            </div>
        </footer>
    }
}
