use super::nav::{NavItems, NavVariant};
use crate::layout::global_context::use_store;
use crate::shared::config::StoreConfig;
use crate::shared::sheet::{Sheet, SheetSide};
use leptos::prelude::*;

#[component]
pub fn MobileMenu() -> impl IntoView {
    let store = use_store();
    let store_name = use_context::<StoreConfig>()
        .map(|c| c.store.name)
        .unwrap_or_default();

    view! {
        <Sheet
            open=store.mobile_menu_open
            side=SheetSide::Left
            title=store_name
            title_icon="lightbulb"
            description=Signal::stored("Навигация по сайту".to_string())
        >
            <nav class="mobile-nav">
                <NavItems variant=NavVariant::Mobile />
            </nav>
        </Sheet>
    }
}
