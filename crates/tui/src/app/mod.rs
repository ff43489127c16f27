//! Core application state and behavior for the explorer.
//!
//! The [`App`] type aggregates the explorer dataset, UI state, and
//! rendering logic. Supporting modules partition the implementation
//! into focused pieces: actions (input handling), rendering, the glyph
//! grid cursor, and the scrollable table panes.

mod actions;
mod grid;
mod render;
mod results;
mod state;

#[cfg(test)]
mod tests;

pub(crate) use grid::GridState;
pub(crate) use results::TablePane;
pub use state::App;
