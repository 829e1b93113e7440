//! Cross-cutting context providers assembled by the composition root.
//!
//! Each provider publishes one ambient context and nothing else; the
//! services behind them (auth issuance, analytics transport,
//! translation authoring) live outside this crate.

mod analytics;
mod session;
mod theme;
mod translation;

pub use analytics::Analytics;
pub use session::{Session, SessionBadge, SessionProvider, use_session};
pub use theme::{Theme, ThemeProvider, ThemeToggle, use_theme};
pub use translation::TranslationProvider;
