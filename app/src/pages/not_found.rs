//! Fallback page for unknown routes.

use leptos::prelude::*;

/// 404 page; sets a real 404 status when rendered on the server.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
      <section class="folio-notfound">
        <h1 class="folio-page-title">"Page not found."</h1>
        <p>"The page you are looking for does not exist."</p>
        <a href="/" class="folio-nav-link">
          "Back to home"
        </a>
      </section>
    }
}
