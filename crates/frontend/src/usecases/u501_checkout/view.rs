use super::view_model::CheckoutVm;
use crate::layout::global_context::use_store;
use crate::shared::icons::icon_sized;
use crate::shared::components::ui::TextField;
use crate::shared::number_format::format_price;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CheckoutDialog() -> impl IntoView {
    let store = use_store();
    let toasts = use_toasts();
    let vm = CheckoutVm::new();

    view! {
        <Dialog open=store.checkout_open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        <span class="dialog-title">
                            {icon_sized("shopping-bag", 24)}
                            "Оформление заказа"
                        </span>
                    </DialogTitle>
                    <DialogContent>
                        <p class="dialog-description">
                            "Заполните форму, и мы свяжемся с вами для подтверждения заказа"
                        </p>

                        <div class="checkout-form">
                            <TextField
                                id="checkout-name"
                                label="Имя"
                                value=vm.name
                                placeholder="Иван Иванов"
                                required=true
                            />
                            <TextField
                                id="checkout-phone"
                                label="Телефон"
                                value=vm.phone
                                input_type="tel"
                                placeholder="+7 (999) 123-45-67"
                                required=true
                            />
                            <TextField
                                id="checkout-email"
                                label="Email"
                                value=vm.email
                                input_type="email"
                                placeholder="example@mail.ru"
                            />
                            <TextField
                                id="checkout-address"
                                label="Адрес доставки"
                                value=vm.address
                                placeholder="Москва, ул. Примерная, д. 1, кв. 1"
                                required=true
                                rows=3
                            />
                            <TextField
                                id="checkout-comment"
                                label="Комментарий к заказу"
                                value=vm.comment
                                placeholder="Дополнительная информация..."
                                rows=3
                            />

                            <Divider />

                            <div class="checkout-summary">
                                <div class="checkout-summary__row">
                                    <span class="text-muted">"Товаров:"</span>
                                    <span>{move || format!("{} шт.", store.cart_len())}</span>
                                </div>
                                <div class="checkout-summary__row checkout-summary__row--total">
                                    <span>"Итого к оплате:"</span>
                                    <span class="text-primary">{move || format_price(store.cart_total())}</span>
                                </div>
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.cancel_command(store)
                        >
                            "Отмена"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.submit_command(store, toasts)
                        >
                            {icon_sized("check", 16)}
                            "Подтвердить заказ"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
