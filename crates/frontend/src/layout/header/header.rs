use super::mobile_menu::MobileMenu;
use super::nav::{NavItems, NavVariant};
use crate::layout::global_context::use_store;
use crate::shared::config::StoreConfig;
use crate::shared::icons::{icon, icon_sized};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let store_name = use_context::<StoreConfig>()
        .map(|c| c.store.name)
        .unwrap_or_default();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content container">
                <div class="brand">
                    <span class="brand__icon">{icon_sized("lightbulb", 32)}</span>
                    <h1 class="brand__title">{store_name}</h1>
                </div>

                <nav class="nav nav--desktop">
                    <NavItems variant=NavVariant::Desktop />
                </nav>

                <div class="header__actions">
                    <button
                        class="button button--ghost button--icon header__menu-button"
                        aria-label="Меню"
                        on:click=move |_| store.mobile_menu_open.set(true)
                    >
                        {icon_sized("menu", 24)}
                    </button>

                    <button
                        class="button button--outline button--icon header__cart-button"
                        aria-label="Корзина"
                        on:click=move |_| store.cart_open.set(true)
                    >
                        {icon("shopping-cart")}
                        {move || {
                            let count = store.cart_len();
                            (count > 0).then(|| view! {
                                <span class="header__cart-badge">
                                    <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                                        {count}
                                    </Badge>
                                </span>
                            })
                        }}
                    </button>
                </div>
            </div>
            <MobileMenu />
        </header>
    }
}
