use super::view_model::use_catalog;
use crate::domain::a001_product::ui::ProductCard;
use crate::shared::components::ui::Checkbox;
use crate::shared::components::{FilterPanel, FilterTag};
use contracts::domain::a001_product::POWER_OPTIONS;
use contracts::enums::{GlowColor, LedType};
use contracts::shared::filters::FilterValue;
use leptos::prelude::*;
use thaw::*;

/// Группа чекбоксов одного измерения фильтра
#[component]
fn FilterGroup(#[prop(into)] title: String, values: Vec<FilterValue>) -> impl IntoView {
    let vm = use_catalog();

    view! {
        <div class="filter-group">
            <Label>{title}</Label>
            {values
                .into_iter()
                .map(|value| {
                    view! {
                        <Checkbox
                            id=value.dom_id()
                            label=value.label()
                            checked=Signal::derive(move || vm.is_selected(value))
                            on_change=Callback::new(move |_| vm.toggle_command(value))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let vm = use_catalog();

    let power_values: Vec<FilterValue> = POWER_OPTIONS.iter().map(|w| FilterValue::Power(*w)).collect();
    let color_values: Vec<FilterValue> = GlowColor::all().into_iter().map(FilterValue::Color).collect();
    let led_values: Vec<FilterValue> = LedType::all().into_iter().map(FilterValue::LedType).collect();

    view! {
        <div class="catalog">
            <div class="page-heading">
                <h2 class="page-heading__title">"Каталог LED продукции"</h2>
                <p class="page-heading__subtitle">
                    {move || format!("Найдено товаров: {}", vm.found_count())}
                </p>
            </div>

            <div class="catalog__layout">
                <aside class="catalog__filters">
                    <FilterPanel
                        is_expanded=vm.filters_expanded
                        active_filters_count=Signal::derive(move || vm.active_count())
                    >
                        <FilterGroup title="Мощность (W)" values=power_values />
                        <Divider />
                        <FilterGroup title="Цвет свечения" values=color_values />
                        <Divider />
                        <FilterGroup title="Тип светодиодов" values=led_values />

                        <div class="filter-panel__tags">
                            <For
                                each=move || vm.selection.with(|s| s.values())
                                key=|value| *value
                                children=move |value: FilterValue| {
                                    view! {
                                        <FilterTag
                                            label=value.label()
                                            on_remove=Callback::new(move |_| vm.toggle_command(value))
                                        />
                                    }
                                }
                            />
                        </div>

                        <Flex gap=FlexGap::Small class="filter-panel-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.apply_command()
                            >
                                "Применить"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.reset_command()
                            >
                                "Сбросить"
                            </Button>
                        </Flex>
                    </FilterPanel>
                </aside>

                <div class="catalog__grid product-grid">
                    {move || {
                        vm.applied
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, product)| {
                                let delay = index as u32 * 50;
                                view! { <ProductCard product=product delay_ms=delay /> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
