//! UI building blocks shared across rendering and state modules.

/// Character property table for the detail pane.
pub mod detail;
/// Glyph grid over the Basic Multilingual Plane.
pub mod grid;
/// Query prompt row with status display.
pub mod prompt;
/// Table row construction for the named list and font panel.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use detail::build_detail_rows;
pub use grid::{GRID_COLUMNS, GridContext, render_grid};
pub use prompt::{PromptContext, render_prompt};
pub use rows::{build_font_rows, build_named_rows};
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::{TableSpec, render_table};
