use crate::layout::global_context::use_store;
use crate::shared::icons::icon;
use contracts::enums::Section;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavVariant {
    Desktop,
    Mobile,
}

/// Пункты навигации по разделам; активный раздел подсвечивается
#[component]
pub fn NavItems(variant: NavVariant) -> impl IntoView {
    let store = use_store();
    let (base_class, active_class) = match variant {
        NavVariant::Desktop => ("nav__item", "nav__item nav__item--active"),
        NavVariant::Mobile => ("mobile-nav__item", "mobile-nav__item mobile-nav__item--active"),
    };

    Section::all()
        .into_iter()
        .map(|section| {
            view! {
                <button
                    class=move || if store.section.get() == section { active_class } else { base_class }
                    on:click=move |_| store.navigate(section)
                >
                    {icon(section.icon_name())}
                    <span>{section.label()}</span>
                </button>
            }
        })
        .collect_view()
}
