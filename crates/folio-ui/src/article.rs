//! Article preview component for blog listings.

use folio_core::BlogSummary;
use folio_core::date::{format_published, meta_line};
use leptos::prelude::*;

/// One blog summary rendered as a linked list item.
///
/// Links to `/blog/{slug}` and shows a secondary line of
/// `{date} • {views} views`. The formatted date is memoized per
/// instance, so it is only recomputed when `published_at` changes.
#[component]
pub fn ArticlePreview(
    /// The summary record to render.
    blog: BlogSummary,
) -> impl IntoView {
    let published_at = blog.published_at.clone();
    let date = Memo::new(move |_| format_published(&published_at));
    let views = blog.views;
    let link = blog.link();

    view! {
      <li class="folio-article-item">
        <a href=link class="folio-article-link">
          <h3 class="folio-article-title">{blog.title.clone()}</h3>
          <p class="folio-article-meta">{move || meta_line(&date.get(), views)}</p>
        </a>
      </li>
    }
}
