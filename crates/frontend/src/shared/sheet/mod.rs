use crate::shared::icons::{icon, icon_sized};
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetSide {
    Left,
    Right,
}

impl SheetSide {
    fn css_class(&self) -> &'static str {
        match self {
            SheetSide::Left => "sheet sheet--left",
            SheetSide::Right => "sheet sheet--right",
        }
    }
}

/// Выезжающая панель поверх страницы (меню, корзина).
/// Закрывается по клику на подложку, по кнопке и по Escape.
#[component]
pub fn Sheet(
    /// Видимость панели
    open: RwSignal<bool>,
    side: SheetSide,
    /// Заголовок панели
    #[prop(into)]
    title: String,
    /// Иконка перед заголовком
    #[prop(optional)]
    title_icon: Option<&'static str>,
    /// Подзаголовок
    #[prop(into)]
    description: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let _ = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <Show when=move || open.get()>
            <div class="sheet-overlay" on:click=move |_| open.set(false)>
                <aside class=side.css_class() on:click=stop_propagation>
                    <div class="sheet__header">
                        <h2 class="sheet__title">
                            {title_icon.map(|name| view! {
                                <span class="sheet__title-icon">{icon_sized(name, 24)}</span>
                            })}
                            {title.clone()}
                        </h2>
                        <p class="sheet__description">{move || description.get()}</p>
                        <button
                            class="button button--icon sheet__close"
                            aria-label="Закрыть"
                            on:click=move |_| open.set(false)
                        >
                            {icon("x")}
                        </button>
                    </div>
                    <div class="sheet__body">
                        {children()}
                    </div>
                </aside>
            </div>
        </Show>
    }
}
