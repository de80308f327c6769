//! Axum route handlers for the Analysis API.

use anyhow::anyhow;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::{AppError, ReportError};
use crate::extraction::{extract_text_blocking, DocumentKind};
use crate::mail::ReportMailer;
use crate::models::match_result::MatchResult;
use crate::models::report::ReportSpec;
use crate::render::render;
use crate::state::AppState;

pub const EMAIL_UNAVAILABLE_WARNING: &str = "SMTP credentials missing";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub id: String,
    #[serde(flatten)]
    pub result: MatchResult,
    pub pdf_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_warning: Option<String>,
}

/// Uploaded resume as received.
#[derive(Debug)]
struct UploadedFile {
    content_type: Option<String>,
    data: Bytes,
}

/// Fields of the `multipart/form-data` analyze request.
#[derive(Debug, Default)]
struct AnalyzeForm {
    cv: Option<UploadedFile>,
    jd_text: Option<String>,
    email: Option<String>,
    send_email: bool,
}

impl AnalyzeForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "cv" => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field.bytes().await.map_err(malformed)?;
                    form.cv = Some(UploadedFile { content_type, data });
                }
                "jdText" => form.jd_text = Some(field.text().await.map_err(malformed)?),
                "email" => form.email = Some(field.text().await.map_err(malformed)?),
                "sendEmail" => {
                    let raw = field.text().await.map_err(malformed)?;
                    form.send_email = raw.trim().eq_ignore_ascii_case("true");
                }
                // Unknown fields are drained and ignored.
                _ => {
                    field.bytes().await.map_err(malformed)?;
                }
            }
        }

        Ok(form)
    }
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart body: {e}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Pipeline: validate upload → extract text → score → render PDF → store report →
/// optionally email it. Scoring and rendering are CPU-bound and run on the blocking pool.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = AnalyzeForm::read(&mut multipart).await?;

    let cv = form
        .cv
        .ok_or_else(|| AppError::Validation("cv file is required".to_string()))?;
    let kind = cv
        .content_type
        .as_deref()
        .and_then(DocumentKind::from_content_type)
        .ok_or_else(|| AppError::UnsupportedMedia("Only PDF or DOCX allowed".to_string()))?;
    let jd_text = form
        .jd_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("jdText cannot be empty".to_string()))?;

    let resume_text = extract_text_blocking(cv.data, kind).await;

    let report_id = Uuid::new_v4().simple().to_string();
    let generated_at = Utc::now();
    let scorer = state.scorer.clone();
    let page = state.page.clone();
    let spec_id = report_id.clone();

    let (result, rendered) = tokio::task::spawn_blocking(move || {
        let result = scorer.score(&resume_text, &jd_text);
        let spec = ReportSpec {
            report_id: spec_id,
            generated_at,
            match_result: result.clone(),
        };
        let rendered = render(&spec, &page)?;
        Ok::<_, ReportError>((result, rendered))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("spawn_blocking failed in analysis: {e}")))??;

    let pdf_path = state.reports.save(&report_id, &rendered.bytes).await?;

    info!(
        report_id = %report_id,
        score = result.score,
        pages = rendered.page_count(),
        "Analysis complete"
    );

    let send_email = form.send_email;
    let recipient = form.email.filter(|e| send_email && !e.trim().is_empty());
    let email_warning = match recipient {
        Some(to) => deliver_report(state.mailer.as_ref(), &to, result.score, rendered.bytes).await,
        None => None,
    };

    Ok(Json(AnalyzeResponse {
        id: report_id,
        result,
        pdf_path,
        email_warning,
    }))
}

/// Emails the report; returns the warning to surface when delivery is impossible or fails.
async fn deliver_report(
    mailer: Option<&ReportMailer>,
    to: &str,
    score: u32,
    pdf: Vec<u8>,
) -> Option<String> {
    let Some(mailer) = mailer else {
        return Some(EMAIL_UNAVAILABLE_WARNING.to_string());
    };
    match mailer.send_report(to, score, pdf).await {
        Ok(()) => None,
        Err(e) => {
            warn!(to = %to, "Report email not sent: {e}");
            Some(e.to_string())
        }
    }
}
