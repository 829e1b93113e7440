//! folio Application
//!
//! Composition root for the folio site: cross-cutting providers
//! (session, theme, translations, analytics), fonts and styles, and
//! the router wiring around the page components.

pub mod pages;
pub mod providers;

use folio_core::SiteConfig;
use folio_ui::Footer;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{BlogPage, HomePage, NotFound};
use crate::providers::{
    Analytics, SessionBadge, SessionProvider, ThemeProvider, ThemeToggle, TranslationProvider,
};

/// Site configuration, bundled at compile time.
const SITE_CONFIG: &str = include_str!("../site.toml");

/// HTML document shell rendered around [`App`] on the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
      <!DOCTYPE html>
      <html lang="en">
        <head>
          <meta charset="utf-8" />
          <meta name="viewport" content="width=device-width, initial-scale=1" />
          <link rel="preconnect" href="https://fonts.googleapis.com" />
          <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin />
          <link
            href="https://fonts.googleapis.com/css2?family=Red+Hat+Text:wght@400;500;700&family=IBM+Plex+Sans:wght@400;700&display=swap"
            rel="stylesheet"
          />
          <AutoReload options=options.clone() />
          <HydrationScripts options />
          <MetaTags />
        </head>
        <body class="font-primary">
          <App />
        </body>
      </html>
    }
}

/// Root application component.
///
/// Establishes the session, theme and translation contexts, the
/// analytics hook, and the router before any page renders. Each page
/// reads only the context it needs; nothing flows back up.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::from_toml_str(SITE_CONFIG).unwrap_or_else(|e| {
        log::warn!("falling back to default site config: {e}");
        SiteConfig::default()
    });
    let title = config.title.clone();
    let description = config.description.clone();
    provide_context(config);

    view! {
      <Stylesheet id="leptos" href="/pkg/folio.css" />
      <Title text=title />
      <Meta name="description" content=description />
      <Link rel="icon" href="/favicon.svg" />
      <Analytics />
      <SessionProvider>
        <ThemeProvider>
          <TranslationProvider>
            <Router>
              <header class="folio-header">
                <nav class="folio-nav" aria-label="Main navigation">
                  <a href="/" class="folio-nav-link">
                    "Home"
                  </a>
                  <a href="/blog" class="folio-nav-link">
                    "Blog"
                  </a>
                  <span class="folio-nav-side">
                    <SessionBadge />
                    <ThemeToggle />
                  </span>
                </nav>
              </header>
              <main class="folio-main">
                <Routes fallback=|| view! { <NotFound /> }>
                  <Route path=StaticSegment("") view=HomePage />
                  <Route path=StaticSegment("blog") view=BlogPage />
                </Routes>
              </main>
              <Footer />
            </Router>
          </TranslationProvider>
        </ThemeProvider>
      </SessionProvider>
    }
}
