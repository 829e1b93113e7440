//! Blog index page.

use folio_core::BlogSummary;
use folio_ui::ArticlePreview;
use leptos::prelude::*;

/// All published articles, newest first.
///
/// Content sourcing is out of scope for the site; the list is
/// maintained here by hand and handed to the renderers fresh on every
/// call.
pub(super) fn articles() -> Vec<BlogSummary> {
    vec![
        BlogSummary::new(
            "scaling-leptos-islands",
            "Scaling Leptos islands without losing hydration",
            "2026-03-18T09:30:00Z",
        )
        .with_views(4_812),
        BlogSummary::new(
            "axum-middleware-ordering",
            "Field notes on Axum middleware ordering",
            "2025-11-02T00:00:00Z",
        )
        .with_views(12_904),
        BlogSummary::new(
            "chrono-formatting-pitfalls",
            "Date formatting pitfalls I keep falling into",
            "2025-06-21T14:00:00Z",
        )
        .with_views(987),
        BlogSummary::new("hello-world-again", "Hello, world (again)", "2024-01-05T00:00:00Z")
            .with_views(123_456),
    ]
}

/// Blog index listing every article.
#[component]
pub fn BlogPage() -> impl IntoView {
    let all = articles();

    view! {
      <section class="folio-blog">
        <h1 class="folio-page-title">"Blog"</h1>
        <ul class="folio-article-list">
          {all
            .into_iter()
            .map(|blog| view! { <ArticlePreview blog=blog /> })
            .collect_view()}
        </ul>
      </section>
    }
}
