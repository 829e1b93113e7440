//! folio UI Components
//!
//! Leptos components for the folio site.
//!
//! # Components
//!
//! ## Blog
//! - [`ArticlePreview`] - One blog summary as a linked list item
//!
//! ## Hero
//! - [`Hero`] - Introductory copy with a decorative blob image
//! - [`ResponsiveImage`] - Plain `<img>` with requested dimensions
//!
//! ## Footer
//! - [`Footer`] - Localized site footer
//!
//! # Example
//!
//! ```ignore
//! use folio_core::BlogSummary;
//! use folio_ui::ArticlePreview;
//! use leptos::prelude::*;
//!
//! #[component]
//! fn ArticleList() -> impl IntoView {
//!     let blog = BlogSummary::new("hello", "Hello", "2024-01-05T00:00:00Z");
//!
//!     view! {
//!         <ul>
//!             <ArticlePreview blog=blog />
//!         </ul>
//!     }
//! }
//! ```

pub mod article;
pub mod footer;
pub mod hero;

pub use article::ArticlePreview;
pub use footer::Footer;
pub use hero::{BLOB, Hero, ResponsiveImage, ViewportDimensions};
