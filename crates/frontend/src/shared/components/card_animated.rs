//! CardAnimated: обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `style/main.css` (`@keyframes card-appear`).
//! Для каскадного появления сетки товаров задержка растёт с индексом:
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=index * 100>
//!     <p>"Контент"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительный CSS-класс карточки.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
