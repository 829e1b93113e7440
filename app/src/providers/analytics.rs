//! Page-view analytics hook.

use leptos::prelude::*;

/// Records a page view once the page is interactive.
///
/// Only the reporting hook lives here; shipping the event somewhere
/// is the analytics backend's concern. Runs client-side only.
#[component]
pub fn Analytics() -> impl IntoView {
    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                log::debug!("page view: {path}");
            }
        }
    });
}
