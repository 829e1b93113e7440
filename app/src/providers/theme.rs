//! Theme context mirrored onto the document element.

use leptos::prelude::*;
use leptos_meta::Html;

/// Color scheme for the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Dark scheme (site default).
    #[default]
    Dark,
    /// Light scheme.
    Light,
}

impl Theme {
    /// Value used for the `data-theme` document attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Reactive handle to the ambient theme, if a provider is installed.
pub fn use_theme() -> Option<RwSignal<Theme>> {
    use_context::<RwSignal<Theme>>()
}

/// Publishes the theme context and keeps `data-theme` in sync.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    view! {
      <Html attr:data-theme=move || theme.get().as_str() />
      {children()}
    }
}

/// Button that flips the ambient theme.
///
/// Renders nothing useful without a [`ThemeProvider`] above it; the
/// click becomes a no-op.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
      <button
        class="folio-theme-toggle"
        aria-label="Toggle color scheme"
        on:click=move |_| {
          if let Some(theme) = theme {
            theme.update(|current| *current = current.toggled());
          }
        }
      >
        {move || theme.map(|theme| theme.get().toggled().as_str()).unwrap_or("light")}
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_attribute_values() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
