use crate::layout::global_context::use_store;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon_sized;
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Карточка товара с кнопкой "В корзину"
#[component]
pub fn ProductCard(
    product: Product,
    /// Задержка анимации появления
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let store = use_store();
    let price = format_price(u64::from(product.price));
    let power = product.power_label();
    let color = product.color.display_name();
    let led_type = product.led_type.display_name();
    let name = product.name.clone();
    let category = product.category.clone();
    let description = product.description.clone();

    view! {
        <CardAnimated class="product-card" delay_ms=delay_ms>
            <div class="product-card__image">
                {icon_sized("lightbulb", 80)}
            </div>
            <div class="product-card__header">
                <h4 class="product-card__title">{name}</h4>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                    {category}
                </Badge>
            </div>
            <p class="product-card__description">{description}</p>
            <dl class="product-card__specs">
                <div class="product-card__spec">
                    <dt>"Мощность:"</dt>
                    <dd>{power}</dd>
                </div>
                <div class="product-card__spec">
                    <dt>"Цвет:"</dt>
                    <dd>{color}</dd>
                </div>
                <div class="product-card__spec">
                    <dt>"Тип LED:"</dt>
                    <dd>{led_type}</dd>
                </div>
            </dl>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="product-card__footer">
                <span class="product-card__price">{price}</span>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| store.add_to_cart(&product)
                >
                    {icon_sized("shopping-cart", 16)}
                    "В корзину"
                </Button>
            </Flex>
        </CardAnimated>
    }
}
