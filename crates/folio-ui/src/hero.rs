//! Hero section with a one-shot viewport measurement.

use leptos::prelude::*;

/// Path of the decorative blob image.
pub const BLOB: &str = "/assets/images/blob.svg";

/// Edge length assumed before the viewport has been measured.
const PLACEHOLDER_EDGE: f64 = 1000.0;

/// A snapshot of the window size, taken once after mount.
///
/// There is no resize listener; the snapshot goes stale if the window
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportDimensions {
    /// Window inner width in CSS pixels.
    pub width: f64,

    /// Window inner height in CSS pixels.
    pub height: f64,
}

impl ViewportDimensions {
    /// Placeholder used before the first client-side measurement.
    pub fn placeholder() -> Self {
        Self {
            width: PLACEHOLDER_EDGE,
            height: PLACEHOLDER_EDGE,
        }
    }

    /// Requested blob image size.
    ///
    /// Both axes are half the viewport *width*; the height axis is
    /// derived from the width as well, keeping the image square.
    pub fn image_size(&self) -> (f64, f64) {
        let edge = self.width / 2.0;
        (edge, edge)
    }
}

impl Default for ViewportDimensions {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Plain `<img>` sized to the requested dimensions.
///
/// Optimization and caching belong to whatever serves the file.
#[component]
pub fn ResponsiveImage(
    /// Image source path.
    #[prop(into)]
    src: String,
    /// Alternative text.
    #[prop(into)]
    alt: String,
    /// Requested width in CSS pixels.
    width: Signal<f64>,
    /// Requested height in CSS pixels.
    height: Signal<f64>,
) -> impl IntoView {
    view! {
      <img
        src=src
        alt=alt
        width=move || width.get().round() as i32
        height=move || height.get().round() as i32
        loading="lazy"
        class="folio-image"
      />
    }
}

/// Introductory hero section.
#[component]
pub fn Hero() -> impl IntoView {
    let viewport = RwSignal::new(ViewportDimensions::placeholder());

    // Measure the window once on mount
    Effect::new(move |_| {
        if let Some(window) = web_sys::window() {
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                viewport.set(ViewportDimensions { width, height });
            }
        }
    });

    let image_width = Signal::derive(move || viewport.get().image_size().0);
    let image_height = Signal::derive(move || viewport.get().image_size().1);

    view! {
      <section id="hero" class="folio-hero">
        <div class="folio-hero-text">
          <h1 class="folio-hero-title">"Rust engineer. Occasional writer."</h1>
          <p class="folio-hero-copy">
            "Hello, I'm Alex. I build fast, boring infrastructure and write about it here."
          </p>
          <p class="folio-hero-copy">
            "I started out on backend services and drifted into the plumbing between
            systems. These days most of my work is Rust: servers, tooling, and the
            occasional frontend when nobody is looking."
          </p>
          <p class="folio-hero-copy">
            "This site collects the notes I wish I had found the first time around."
          </p>
        </div>
        <div class="folio-hero-blob">
          <ResponsiveImage
            src=BLOB
            alt="abstract shape"
            width=image_width
            height=image_height
          />
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_image_size() {
        let viewport = ViewportDimensions::placeholder();
        assert_eq!(viewport.image_size(), (500.0, 500.0));
    }

    #[test]
    fn test_measured_image_size_halves_width() {
        let viewport = ViewportDimensions {
            width: 1440.0,
            height: 900.0,
        };
        assert_eq!(viewport.image_size(), (720.0, 720.0));
    }

    #[test]
    fn test_image_height_ignores_viewport_height() {
        let viewport = ViewportDimensions {
            width: 1200.0,
            height: 360.0,
        };
        let (width, height) = viewport.image_size();
        assert_eq!(width, height);
        assert_eq!(height, 600.0);
    }

    #[test]
    fn test_default_is_placeholder() {
        assert_eq!(ViewportDimensions::default(), ViewportDimensions::placeholder());
    }
}
