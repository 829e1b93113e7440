//! Translation context for localized strings.

use folio_core::Translations;
use leptos::prelude::*;

/// Publishes the bundled translation table to descendants.
///
/// A broken locale bundle degrades to the empty table (every lookup
/// echoes its key) instead of failing the page.
#[component]
pub fn TranslationProvider(children: Children) -> impl IntoView {
    let translations = Translations::bundled().unwrap_or_else(|e| {
        log::warn!("falling back to empty translations: {e}");
        Translations::new()
    });
    provide_context(translations);
    children()
}
