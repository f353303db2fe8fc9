use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// FilterPanel - карточка фильтров каталога: заголовок со счётчиком
/// активных значений и сворачиваемое содержимое.
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Filter content: checkbox groups, chips and action buttons
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <Card class="filter-panel">
            <div class="filter-panel-header" on:click=toggle_expanded>
                <svg
                    width="16"
                    height="16"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }
                >
                    <polyline points="6 9 12 15 18 9"></polyline>
                </svg>
                {icon("filter")}
                <span class="filter-panel__title">"Фильтры"</span>
                {move || {
                    let count = active_filters_count.get();
                    (count > 0).then(|| view! {
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Brand>
                            {count}
                        </Badge>
                    })
                }}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </Card>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
