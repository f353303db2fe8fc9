use leptos::prelude::*;

/// Подпись поля; обязательные помечаются `*`
pub fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

/// Поле формы с подписью, привязанное к `RwSignal<String>`.
///
/// `required` ставится на сам элемент и добавляет `*` к подписи.
/// При `rows` рендерится `<textarea>`, иначе `<input>`.
#[component]
pub fn TextField(
    /// Label text
    #[prop(into)]
    label: String,
    /// Bound value
    value: RwSignal<String>,
    /// ID for the input element (links the label)
    #[prop(into)]
    id: String,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Input type: "text" (default), "tel", "email"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Multiline: number of textarea rows
    #[prop(optional)]
    rows: Option<u32>,
) -> impl IntoView {
    let label_text = field_label(&label, required);
    let label_for = id.clone();

    let control = match rows {
        Some(rows) => view! {
            <textarea
                id=id
                class="form__textarea"
                placeholder=placeholder
                required=required
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        None => view! {
            <input
                id=id
                class="form__input"
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label_text}
            </label>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_label_marked() {
        assert_eq!(field_label("Телефон", true), "Телефон *");
        assert_eq!(field_label("Email", false), "Email");
    }
}
