use crate::shared::config::StoreConfig;
use crate::shared::icons::icon_sized;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DeliveryPage() -> impl IntoView {
    let delivery = use_context::<StoreConfig>().unwrap_or_default().delivery;
    let last = delivery.methods.len().saturating_sub(1);

    view! {
        <div class="static-page">
            <h2 class="page-heading__title">"Доставка"</h2>
            <Card>
                <h3 class="card-title card-title--icon">
                    {icon_sized("truck", 24)}
                    "Способы доставки"
                </h3>
                {delivery
                    .methods
                    .iter()
                    .enumerate()
                    .map(|(index, method)| {
                        let details = delivery.details_of(method);
                        view! {
                            <div class="delivery-method">
                                <h4>{method.title.clone()}</h4>
                                <p class="text-muted">{details}</p>
                            </div>
                            {(index < last).then(|| view! { <Divider /> })}
                        }
                    })
                    .collect_view()}
            </Card>
        </div>
    }
}
