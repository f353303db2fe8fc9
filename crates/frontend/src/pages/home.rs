use crate::domain::a001_product::ui::ProductCard;
use crate::layout::global_context::use_store;
use crate::shared::icons::icon_sized;
use contracts::domain::a001_product::popular;
use contracts::enums::Section;
use leptos::prelude::*;
use thaw::*;

const POPULAR_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__content">
                    <h2 class="hero__title">"Освещение будущего"</h2>
                    <p class="hero__subtitle">
                        "Профессиональная LED продукция для дома и бизнеса. Энергоэффективность, долговечность, стиль."
                    </p>
                    <Flex gap=FlexGap::Medium>
                        <Button
                            appearance=ButtonAppearance::Primary
                            size=ButtonSize::Large
                            on_click=move |_| store.navigate(Section::Catalog)
                        >
                            "Каталог товаров"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Large
                            on_click=move |_| store.navigate(Section::About)
                        >
                            "О компании"
                        </Button>
                    </Flex>
                </div>
                <div class="hero__decoration">
                    {icon_sized("lightbulb", 400)}
                </div>
            </section>

            <section class="popular">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="popular__header">
                    <h3 class="section-title">"Популярные товары"</h3>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| store.navigate(Section::Catalog)
                    >
                        "Смотреть все"
                        {icon_sized("arrow-right", 16)}
                    </Button>
                </Flex>
                <div class="product-grid">
                    {popular(POPULAR_COUNT)
                        .iter()
                        .enumerate()
                        .map(|(index, product)| {
                            let delay = index as u32 * 100;
                            view! { <ProductCard product=product.clone() delay_ms=delay /> }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
