//! Section analyzers — one fixed rubric per resume dimension.
//!
//! Each analyzer substitutes the resume text and job description into its
//! template, makes exactly one model call, and wraps the reply in a tagged
//! outcome. A failure here is per-section and non-fatal: the remaining
//! sections and resumes proceed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::prompts::{
    EXPERIENCE_PROMPT_TEMPLATE, PROJECTS_PROMPT_TEMPLATE, SKILLS_PROMPT_TEMPLATE,
};
use crate::analysis::report::{ModelOutcome, SectionReport};
use crate::llm_client::TextModel;

/// The three analyzed resume dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Skills,
    Projects,
    Experience,
}

impl SectionKind {
    /// Fixed display order. Reports always list sections this way, whatever
    /// order the underlying calls complete in.
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Experience,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Skills => "Skills Match",
            SectionKind::Projects => "Project Analysis",
            SectionKind::Experience => "Experience Analysis",
        }
    }

    fn template(self) -> &'static str {
        match self {
            SectionKind::Skills => SKILLS_PROMPT_TEMPLATE,
            SectionKind::Projects => PROJECTS_PROMPT_TEMPLATE,
            SectionKind::Experience => EXPERIENCE_PROMPT_TEMPLATE,
        }
    }
}

/// Renders the section prompt. Inputs are substituted verbatim — empty
/// strings are accepted and produce degenerate model output, not an error.
pub fn build_section_prompt(kind: SectionKind, resume_text: &str, job_description: &str) -> String {
    kind.template()
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

/// Analyzes one dimension of one resume with a single model call.
pub async fn analyze_section(
    kind: SectionKind,
    resume_text: &str,
    job_description: &str,
    model: &dyn TextModel,
) -> SectionReport {
    let prompt = build_section_prompt(kind, resume_text, job_description);
    let outcome = ModelOutcome::from_result(model.generate(&prompt).await);

    if let ModelOutcome::Failed { message, .. } = &outcome {
        warn!("{} analysis failed: {message}", kind.title());
    }

    SectionReport {
        name: kind.title().to_string(),
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;

    #[test]
    fn test_titles_are_the_three_fixed_names() {
        let titles: Vec<&str> = SectionKind::ALL.iter().map(|k| k.title()).collect();
        assert_eq!(
            titles,
            vec!["Skills Match", "Project Analysis", "Experience Analysis"]
        );
    }

    #[test]
    fn test_prompt_substitutes_both_inputs_verbatim() {
        let prompt = build_section_prompt(
            SectionKind::Skills,
            "RESUME BODY <with & chars>",
            "JD BODY {braces stay}",
        );
        assert!(prompt.contains("Resume: RESUME BODY <with & chars>"));
        assert!(prompt.contains("Job Description: JD BODY {braces stay}"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_each_kind_uses_its_own_rubric() {
        let skills = build_section_prompt(SectionKind::Skills, "r", "j");
        let projects = build_section_prompt(SectionKind::Projects, "r", "j");
        let experience = build_section_prompt(SectionKind::Experience, "r", "j");
        assert!(skills.contains("**Skills Match Evaluation**"));
        assert!(projects.contains("**Project Analysis Evaluation**"));
        assert!(experience.contains("**Experience Analysis Evaluation**"));
    }

    #[test]
    fn test_empty_inputs_still_render_a_prompt() {
        let prompt = build_section_prompt(SectionKind::Experience, "", "");
        assert!(prompt.contains("Resume: \n"));
        assert!(prompt.ends_with("Job Description: "));
    }

    #[tokio::test]
    async fn test_analyze_section_wraps_reply_text() {
        let model = ScriptedModel::always_ok("  scored breakdown  ");
        let report = analyze_section(SectionKind::Projects, "resume", "jd", &model).await;
        assert_eq!(report.name, "Project Analysis");
        assert_eq!(
            report.outcome,
            ModelOutcome::Ok {
                text: "scored breakdown".to_string()
            }
        );
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_analyze_section_failure_formats_deterministically() {
        let model = ScriptedModel::always_failing("quota exceeded");
        let report = analyze_section(SectionKind::Skills, "resume", "jd", &model).await;
        assert_eq!(
            report.outcome.display_text(),
            "Error: API error (status 503): quota exceeded"
        );
    }
}
