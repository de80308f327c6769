// Report Rendering
// Implements: report composition, PDF encoding, on-disk report storage.
// Composition and encoding are pure; only `store` touches the filesystem.

pub mod pdf;
pub mod report;
pub mod store;

pub use report::render;
pub use store::ReportStore;
