//! Site footer with a localized message.

use folio_core::Translations;
use leptos::prelude::*;

/// Namespace the footer strings live in.
const NAMESPACE: &str = "common";

/// Localized site footer.
///
/// Resolves `footer-message` from the ambient [`Translations`]
/// context. Without a provider, or with an unresolvable key, the key
/// itself renders.
#[component]
pub fn Footer() -> impl IntoView {
    let message = use_context::<Translations>()
        .map(|table| table.resolve(NAMESPACE, "footer-message"))
        .unwrap_or_else(|| "footer-message".to_string());

    view! {
      <footer class="folio-footer">
        <p class="folio-footer-text">{message}</p>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolvable_key() {
        let mut table = Translations::new();
        table
            .load_json(NAMESPACE, r#"{"footer-message":"Thanks for stopping by."}"#)
            .unwrap();
        assert_eq!(
            table.resolve(NAMESPACE, "footer-message"),
            "Thanks for stopping by."
        );
    }

    #[test]
    fn test_unresolvable_key_echoes_key() {
        let table = Translations::new();
        assert_eq!(table.resolve(NAMESPACE, "footer-message"), "footer-message");
    }
}
