//! Ambient session context.
//!
//! The site never issues or verifies credentials; whatever identity
//! the host hands over is published to descendants as-is.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// An authenticated visitor, when one exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Display name.
    pub name: String,

    /// Account email.
    pub email: String,
}

impl Session {
    /// Create a new session record.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Reactive handle to the ambient session, if a provider is installed.
pub fn use_session() -> Option<RwSignal<Option<Session>>> {
    use_context::<RwSignal<Option<Session>>>()
}

/// Publishes the session context to descendants.
#[component]
pub fn SessionProvider(
    /// Session established by the host, if any.
    #[prop(optional)]
    session: Option<Session>,
    children: Children,
) -> impl IntoView {
    provide_context(RwSignal::new(session));
    children()
}

/// Shows who is signed in, when anyone is.
#[component]
pub fn SessionBadge() -> impl IntoView {
    let session = use_session();

    view! {
      <Show when=move || session.map(|s| s.get().is_some()).unwrap_or(false)>
        <span class="folio-session-badge">
          {move || {
            session
              .and_then(|s| s.get())
              .map(|s| format!("Signed in as {}", s.name))
              .unwrap_or_default()
          }}
        </span>
      </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_creation() {
        let session = Session::new("Alex", "alex@folio.dev");
        assert_eq!(session.name, "Alex");
        assert_eq!(session.email, "alex@folio.dev");
    }

    #[test]
    fn test_session_serialization() {
        let session = Session::new("Alex", "alex@folio.dev");
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"name\":\"Alex\""));
        assert!(json.contains("\"email\":\"alex@folio.dev\""));
    }
}
