use crate::shared::config::StoreConfig;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;
use thaw::*;

#[component]
fn ContactCard(icon_name: &'static str, title: &'static str, lines: Vec<String>) -> impl IntoView {
    view! {
        <Card>
            <h3 class="card-title card-title--icon">
                {icon_sized(icon_name, 24)}
                {title}
            </h3>
            <p class="text-muted">
                {lines.into_iter().map(|line| view! { <span class="contact-line">{line}</span> }).collect_view()}
            </p>
        </Card>
    }
}

#[component]
pub fn ContactsPage() -> impl IntoView {
    let contacts = use_context::<StoreConfig>().unwrap_or_default().contacts;

    view! {
        <div class="static-page">
            <h2 class="page-heading__title">"Контакты"</h2>
            <div class="card-grid card-grid--two">
                <ContactCard icon_name="map-pin" title="Адрес" lines=vec![contacts.address] />
                <ContactCard icon_name="phone" title="Телефон" lines=vec![contacts.phone] />
                <ContactCard icon_name="mail" title="Email" lines=vec![contacts.email] />
                <ContactCard icon_name="clock" title="Режим работы" lines=contacts.hours />
            </div>
        </div>
    }
}
