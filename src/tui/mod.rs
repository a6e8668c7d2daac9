//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the search-term core has no terminal dependency.

pub mod app;
pub mod render;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use terminal_guard::{TerminalGuard, TerminalRestorer};
pub use theme::HighlightTheme;
