//! Axum route handlers for submissions.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::pipeline::{evaluate_submission, ResumeInput};
use crate::analysis::report::SubmissionReport;
use crate::errors::AppError;
use crate::extract::pdf_to_text;
use crate::state::AppState;

/// Per-file upload ceiling.
const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// Shown whenever the guard condition (files AND job description) fails.
const MISSING_INPUT_WARNING: &str = "Please upload resumes and provide a job description.";

/// POST /api/v1/submissions
///
/// Multipart form: repeated `resumes` PDF files plus either `jd_text`
/// (pasted) or `jd_preset` (benchmark preset name). Runs the full analysis —
/// three section calls per resume, one ranking call — and returns the
/// complete report. No model call is made unless the guard passes and every
/// file's text extracts cleanly.
pub async fn handle_submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SubmissionReport>, AppError> {
    let mut jd_text: Option<String> = None;
    let mut jd_preset: Option<String> = None;
    let mut uploads: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let field_name = field.name().unwrap_or("");
        match field_name {
            "jd_text" => {
                jd_text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("invalid jd_text field: {e}")))?,
                );
            }
            "jd_preset" => {
                jd_preset = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("invalid jd_preset field: {e}"))
                })?);
            }
            "resumes" => {
                let file_name = field.file_name().unwrap_or("unknown").to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read upload '{file_name}': {e}"))
                })?;
                uploads.push((file_name, data));
            }
            _ => {
                // Drain unknown fields so the stream stays consumable
                let _ = field.bytes().await;
            }
        }
    }

    let job_description = resolve_job_description(&state, jd_text, jd_preset)?;

    // Guard: both inputs present, or no processing at all
    if uploads.is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(MISSING_INPUT_WARNING.to_string()));
    }

    for (name, data) in &uploads {
        if !is_pdf_name(name) {
            return Err(AppError::UnprocessableEntity(format!(
                "'{name}': only PDF resumes are accepted"
            )));
        }
        if data.len() > MAX_RESUME_BYTES {
            return Err(AppError::UnprocessableEntity(format!(
                "'{name}': file exceeds the 10 MiB limit"
            )));
        }
    }

    // Extract every resume before the first model call, so a broken PDF
    // costs nothing
    let mut resumes = Vec::with_capacity(uploads.len());
    for (name, data) in &uploads {
        let text = pdf_to_text(data).map_err(|e| {
            AppError::UnprocessableEntity(format!("could not extract text from '{name}': {e}"))
        })?;
        resumes.push(ResumeInput {
            name: name.clone(),
            text,
        });
    }

    let submission_id = Uuid::new_v4();
    info!(
        "submission {submission_id}: {} resumes against a {}-char job description",
        resumes.len(),
        job_description.len()
    );

    let (reports, ranking) =
        evaluate_submission(&resumes, &job_description, state.model.as_ref()).await;

    info!(
        "submission {submission_id} complete: ranking {}",
        if ranking.is_ok() { "produced" } else { "failed" }
    );

    Ok(Json(SubmissionReport {
        submission_id,
        generated_at: Utc::now(),
        resumes: reports,
        ranking,
    }))
}

/// Pasted text wins when both sources are supplied; a named preset must
/// exist. Returns an empty string when neither source yields anything so the
/// guard above produces the user-facing warning.
fn resolve_job_description(
    state: &AppState,
    jd_text: Option<String>,
    jd_preset: Option<String>,
) -> Result<String, AppError> {
    if let Some(text) = jd_text {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }
    if let Some(name) = jd_preset {
        if !name.trim().is_empty() {
            let preset = state.presets.get(&name).ok_or_else(|| {
                AppError::NotFound(format!("unknown benchmark JD preset '{name}'"))
            })?;
            return Ok(preset.text.clone());
        }
    }
    Ok(String::new())
}

fn is_pdf_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
