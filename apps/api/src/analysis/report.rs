//! Typed analysis outcomes and the per-submission report.
//!
//! A model failure is content, not a transport error: it travels to the
//! presentation boundary as a tagged `Failed` variant, and only there is it
//! flattened into the `Error: <message>` display form. Nothing upstream
//! branches on a magic error string.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::llm_client::ModelError;

/// Coarse classification of a failed remote-model call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The HTTP request itself failed (connect, timeout, body decode).
    Transport,
    /// The API answered with a non-success status.
    Api,
    /// The API answered successfully but returned no usable text.
    EmptyResponse,
}

impl From<&ModelError> for FailureKind {
    fn from(err: &ModelError) -> Self {
        match err {
            ModelError::Http(_) => FailureKind::Transport,
            ModelError::Api { .. } => FailureKind::Api,
            ModelError::EmptyResponse => FailureKind::EmptyResponse,
        }
    }
}

/// Result of one remote-model call: the trimmed reply text, or a tagged
/// failure. Used for each of the three section analyses and for the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelOutcome {
    Ok { text: String },
    Failed { kind: FailureKind, message: String },
}

impl ModelOutcome {
    /// Wraps a raw model result, trimming successful text.
    pub fn from_result(result: Result<String, ModelError>) -> Self {
        match result {
            Ok(text) => ModelOutcome::Ok {
                text: text.trim().to_string(),
            },
            Err(err) => ModelOutcome::Failed {
                kind: FailureKind::from(&err),
                message: err.to_string(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ModelOutcome::Ok { .. })
    }

    /// Display form for text surfaces (the ranking interchange and the UI's
    /// fallback rendering): the text itself, or `Error: <message>`.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            ModelOutcome::Ok { text } => Cow::Borrowed(text),
            ModelOutcome::Failed { message, .. } => Cow::Owned(format!("Error: {message}")),
        }
    }
}

/// One analyzed dimension of one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    /// Fixed display title: "Skills Match", "Project Analysis" or
    /// "Experience Analysis".
    pub name: String,
    pub outcome: ModelOutcome,
}

/// All section analyses for one uploaded resume, in fixed display order.
/// Fully populated once the pipeline joins; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeReport {
    pub resume_name: String,
    pub sections: Vec<SectionReport>,
}

/// Response body for one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub submission_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub resumes: Vec<ResumeReport>,
    pub ranking: ModelOutcome,
}
