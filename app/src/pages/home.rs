//! Home page - hero plus the most recent articles.

use folio_ui::{ArticlePreview, Hero};
use leptos::prelude::*;

use super::blog::articles;

/// Number of articles surfaced on the home page.
const RECENT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let recent: Vec<_> = articles().into_iter().take(RECENT).collect();

    view! {
      <Hero />
      <section class="folio-recent">
        <h2 class="folio-section-title">"Recent posts"</h2>
        <ul class="folio-article-list">
          {recent
            .into_iter()
            .map(|blog| view! { <ArticlePreview blog=blog /> })
            .collect_view()}
        </ul>
      </section>
    }
}
