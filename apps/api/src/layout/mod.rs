// Report Layout
// Implements: page geometry and fonts, greedy word wrapping, cursor-based pagination.
// Pure transformations only: text in, positioned lines out. PDF encoding lives in `render`.

pub mod page;
pub mod paginate;
pub mod wrap;

// Re-export the public API consumed by the renderer.
pub use page::{a4_report_geometry, cm, PageGeometry, ReportFont};
pub use paginate::{LayoutState, PageLayout, PlacedLine, ReportLayout};
pub use wrap::wrap_words;
