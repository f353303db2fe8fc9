use crate::shared::icons::icon_sized;
use contracts::shared::blog::posts;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <div class="static-page">
            <h2 class="page-heading__title">"Блог"</h2>
            <div class="blog-list">
                {posts()
                    .into_iter()
                    .map(|post| {
                        let date = post.date_label();
                        view! {
                            <Card class="blog-post">
                                <div class="blog-post__date text-muted">
                                    {icon_sized("calendar", 16)}
                                    {date}
                                </div>
                                <h3 class="card-title">{post.title}</h3>
                                <p class="text-muted">{post.excerpt}</p>
                                <Button appearance=ButtonAppearance::Transparent>
                                    "Читать далее"
                                    {icon_sized("arrow-right", 16)}
                                </Button>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
