use crate::layout::global_context::use_store;
use crate::shared::icons::icon_sized;
use crate::shared::number_format::format_price;
use crate::shared::sheet::{Sheet, SheetSide};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Корзина: выезжающая справа панель со списком позиций и итогом
#[component]
pub fn CartDrawer() -> impl IntoView {
    let store = use_store();

    let description = Signal::derive(move || {
        let count = store.cart_len();
        if count == 0 {
            "Корзина пуста".to_string()
        } else {
            format!("Товаров: {}", count)
        }
    });

    view! {
        <Sheet open=store.cart_open side=SheetSide::Right title="Корзина" description=description>
            <div class="cart">
                // Позиции могут повторяться, поэтому ключ строится из id и позиции
                <For
                    each=move || {
                        store.cart.with(|cart| {
                            cart.items().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|(index, product)| (product.id, *index)
                    children=move |(_, product): (usize, Product)| {
                        let id = product.id;
                        view! {
                            <div class="cart__item">
                                <div class="cart__item-info">
                                    <p class="cart__item-name">{product.name.clone()}</p>
                                    <p class="cart__item-price">{format_price(u64::from(product.price))}</p>
                                </div>
                                <button
                                    class="button button--ghost button--icon"
                                    aria-label="Удалить"
                                    on:click=move |_| store.remove_from_cart(id)
                                >
                                    {icon_sized("x", 16)}
                                </button>
                            </div>
                        }
                    }
                />

                <Show when=move || { store.cart_len() > 0 }>
                    <Divider />
                    <div class="cart__total">
                        <span>"Итого:"</span>
                        <span>{move || format_price(store.cart_total())}</span>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="cart__checkout"
                        on_click=move |_| store.open_checkout()
                    >
                        "Оформить заказ"
                    </Button>
                </Show>
            </div>
        </Sheet>
    }
}
