//! Ranking aggregation — one comparative call across all analyzed resumes.
//!
//! The ranking input is rendered by an explicit, deterministic serialization
//! of the per-resume reports, so the text the model sees is well-defined and
//! testable on its own. The model's reply is surfaced verbatim: the table it
//! is asked for is requested, never parsed or validated.

use tracing::warn;

use crate::analysis::prompts::RANKING_PROMPT_TEMPLATE;
use crate::analysis::report::{ModelOutcome, ResumeReport};
use crate::llm_client::TextModel;

/// Renders the ranking interchange text: one block per resume with its name
/// and each section's display text (failed sections appear as their
/// `Error: <message>` form). Zero reports render to an empty string.
pub fn render_ranking_input(reports: &[ResumeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str("Resume ");
        out.push_str(&report.resume_name);
        out.push_str(":\n");
        for section in &report.sections {
            out.push_str(&section.name);
            out.push_str(": ");
            out.push_str(&section.outcome.display_text());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Builds the ranking prompt and makes the single aggregation call.
///
/// Always issues exactly one model call — even for zero reports — and never
/// panics; a failed call comes back as a tagged `Failed` outcome, which the
/// caller displays as the terminal ranking value.
pub async fn rank_resumes(
    reports: &[ResumeReport],
    job_description: &str,
    model: &dyn TextModel,
) -> ModelOutcome {
    let resumes_for_ranking = render_ranking_input(reports);
    let prompt = RANKING_PROMPT_TEMPLATE
        .replace("{resumes_for_ranking}", &resumes_for_ranking)
        .replace("{job_description}", job_description);

    let outcome = ModelOutcome::from_result(model.generate(&prompt).await);
    if let ModelOutcome::Failed { message, .. } = &outcome {
        warn!("ranking call failed: {message}");
    }
    outcome
}
