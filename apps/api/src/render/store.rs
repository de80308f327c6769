//! Report storage — persists rendered PDFs under the reports directory.
//!
//! A report with id `abc` lives at `<dir>/abc.pdf` and is served at `/reports/abc.pdf`.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::ReportError;

pub const REPORTS_URL_PREFIX: &str = "/reports";
const MAX_REPORT_ID_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the reports directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), ReportError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub fn disk_path(&self, report_id: &str) -> PathBuf {
        self.dir.join(format!("{report_id}.pdf"))
    }

    pub fn url_path(report_id: &str) -> String {
        format!("{REPORTS_URL_PREFIX}/{report_id}.pdf")
    }

    /// Writes the PDF and returns the URL path it is served under.
    pub async fn save(&self, report_id: &str, bytes: &[u8]) -> Result<String, ReportError> {
        if !is_safe_report_id(report_id) {
            return Err(ReportError::InvalidSpec(format!(
                "report_id {report_id:?} is not safe for use as a file name"
            )));
        }
        let path = self.disk_path(report_id);
        tokio::fs::write(&path, bytes).await?;
        info!(report_id, path = %path.display(), bytes = bytes.len(), "Report written");
        Ok(Self::url_path(report_id))
    }
}

/// Ids must be non-empty, at most 64 chars, and use only `[A-Za-z0-9_-]`.
pub fn is_safe_report_id(report_id: &str) -> bool {
    !report_id.is_empty()
        && report_id.len() <= MAX_REPORT_ID_LEN
        && report_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
