use leptos::prelude::*;

/// Checkbox с подписью. Состояние хранит владелец: компонент только
/// сообщает о клике через `on_change`.
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    on_change: Callback<bool>,
    /// ID for the checkbox element (links the label)
    #[prop(into)]
    id: String,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let label_for = id.clone();

    view! {
        <div class=move || format!("form__checkbox-wrapper {}", additional_class())>
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
