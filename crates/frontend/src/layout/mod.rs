pub mod footer;
pub mod global_context;
pub mod header;

use crate::domain::a002_cart::ui::CartDrawer;
use crate::shared::toast::ToastHost;
use crate::usecases::u501_checkout::CheckoutDialog;
use leptos::prelude::*;

/// Каркас витрины.
///
/// ```text
/// +------------------------------------------+
/// |  Header (logo, nav, menu, cart button)   |
/// +------------------------------------------+
/// |              Section content             |
/// +------------------------------------------+
/// |                  Footer                  |
/// +------------------------------------------+
/// ```
///
/// Корзина, диалог оформления и уведомления рендерятся поверх.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />

            <main class="app-main container">
                {children()}
            </main>

            <footer::Footer />

            <CartDrawer />
            <CheckoutDialog />
            <ToastHost />
        </div>
    }
}
