use crate::domain::a001_product::ui::CatalogVm;
use crate::layout::global_context::StoreContext;
use crate::layout::Shell;
use crate::pages::SectionView;
use crate::shared::config::StoreConfig;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: StoreConfig) -> impl IntoView {
    let store = StoreContext::new();

    // Initialize URL integration before the first render of the section.
    store.init_router_integration();

    provide_context(store);
    provide_context(ToastService::new(config.ui.toast_duration_ms));
    provide_context(CatalogVm::new());
    provide_context(config);

    view! {
        <ConfigProvider>
            <Shell>
                <SectionView />
            </Shell>
        </ConfigProvider>
    }
}
