//! Framework-agnostic core for the `uglys` Unicode explorer.
//!
//! The root module re-exports the property facade, the named code-point
//! index with its query filter, the suggestion seed, and the system font
//! catalog so front-ends can pull everything from one place. Nothing in
//! this crate depends on a UI toolkit.

pub mod data;
pub mod fonts;
pub mod index;
pub mod properties;
pub mod suggest;

pub use data::{ExploreOutcome, ExplorerData, Selection};
pub use fonts::FontCatalog;
pub use index::{NamedEntry, NamedIndex};
pub use properties::{BMP_LEN, CharInfo, MAX_CODE_POINT, parse_code_point};
pub use suggest::suggestions;
