use crate::shared::config::StoreConfig;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;
use thaw::*;

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("award", "10+ лет опыта", "Профессиональная работа на рынке LED технологий"),
    ("users", "5000+ клиентов", "Доверяют нашему качеству и сервису"),
    ("package-check", "Гарантия 3 года", "На всю нашу продукцию"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let store_name = use_context::<StoreConfig>()
        .map(|c| c.store.name)
        .unwrap_or_default();

    view! {
        <div class="static-page">
            <h2 class="page-heading__title">{format!("О компании {}", store_name)}</h2>
            <p class="lead">
                {format!(
                    "Компания {} является ведущим поставщиком профессиональной светодиодной продукции в России. \
                     Мы предлагаем широкий ассортимент LED решений для дома, офиса и промышленных объектов.",
                    store_name
                )}
            </p>
            <div class="card-grid card-grid--three">
                {HIGHLIGHTS
                    .iter()
                    .map(|(icon_name, title, text)| view! {
                        <Card>
                            <span class="text-primary">{icon_sized(icon_name, 40)}</span>
                            <h4 class="card-title">{*title}</h4>
                            <p class="text-muted">{*text}</p>
                        </Card>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
