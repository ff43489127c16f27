//! Interactive terminal UI for the `uglys` Unicode explorer.
//!
//! This crate contains the full TUI application: the glyph grid over the
//! Basic Multilingual Plane, the filtered named-code-point list, the
//! character detail pane with its font-coverage panel, the query prompt,
//! the event-loop runtime, and the theme definitions that style it all.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::App;
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
