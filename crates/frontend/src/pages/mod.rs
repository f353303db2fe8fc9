pub mod about;
pub mod blog;
pub mod contacts;
pub mod delivery;
pub mod home;

use crate::domain::a001_product::ui::CatalogPage;
use crate::layout::global_context::use_store;
use contracts::enums::Section;
use leptos::prelude::*;

/// Содержимое активного раздела
#[component]
pub fn SectionView() -> impl IntoView {
    let store = use_store();

    move || match store.section.get() {
        Section::Home => view! { <home::HomePage /> }.into_any(),
        Section::Catalog => view! { <CatalogPage /> }.into_any(),
        Section::About => view! { <about::AboutPage /> }.into_any(),
        Section::Delivery => view! { <delivery::DeliveryPage /> }.into_any(),
        Section::Contacts => view! { <contacts::ContactsPage /> }.into_any(),
        Section::Blog => view! { <blog::BlogPage /> }.into_any(),
    }
}
