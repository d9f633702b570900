//! Per-resume analysis pipeline and whole-submission orchestration.
//!
//! The three section analyzers are independent — none consumes another's
//! output — so they fan out concurrently and join before the report is
//! assembled. Resumes themselves are processed sequentially, and the single
//! ranking call runs after the last resume: a submission with N resumes
//! costs exactly 3N + 1 model calls.

use tracing::info;

use crate::analysis::ranking::rank_resumes;
use crate::analysis::report::{ModelOutcome, ResumeReport};
use crate::analysis::sections::{analyze_section, SectionKind};
use crate::llm_client::TextModel;

/// One extracted resume ready for analysis.
#[derive(Debug, Clone)]
pub struct ResumeInput {
    /// Uploaded file name, used as the resume's display name throughout.
    pub name: String,
    pub text: String,
}

/// Runs the three section analyzers for one resume, concurrently, and joins
/// their results into a report with the sections in fixed display order.
///
/// The report always carries exactly the three section titles, whether the
/// underlying calls succeeded or failed.
pub async fn run_pipeline(
    resume_name: &str,
    resume_text: &str,
    job_description: &str,
    model: &dyn TextModel,
) -> ResumeReport {
    let (skills, projects, experience) = tokio::join!(
        analyze_section(SectionKind::Skills, resume_text, job_description, model),
        analyze_section(SectionKind::Projects, resume_text, job_description, model),
        analyze_section(SectionKind::Experience, resume_text, job_description, model),
    );

    ResumeReport {
        resume_name: resume_name.to_string(),
        sections: vec![skills, projects, experience],
    }
}

/// Analyzes every resume in order, then ranks them with one final call.
///
/// Per-section and ranking failures are carried inside the reports; this
/// function itself never fails.
pub async fn evaluate_submission(
    resumes: &[ResumeInput],
    job_description: &str,
    model: &dyn TextModel,
) -> (Vec<ResumeReport>, ModelOutcome) {
    let mut reports = Vec::with_capacity(resumes.len());

    for resume in resumes {
        info!("analyzing resume '{}'", resume.name);
        let report = run_pipeline(&resume.name, &resume.text, job_description, model).await;
        let failed = report.sections.iter().filter(|s| !s.outcome.is_ok()).count();
        if failed > 0 {
            info!(
                "resume '{}' analyzed with {failed}/3 failed sections",
                resume.name
            );
        }
        reports.push(report);
    }

    let ranking = rank_resumes(&reports, job_description, model).await;
    (reports, ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::llm_client::ModelError;

    fn inputs(n: usize) -> Vec<ResumeInput> {
        (1..=n)
            .map(|i| ResumeInput {
                name: format!("resume{i}.pdf"),
                text: format!("candidate {i} text"),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_pipeline_yields_the_three_titles_in_order() {
        let model = ScriptedModel::always_ok("fine");
        let report = run_pipeline("a.pdf", "text", "jd", &model).await;
        let titles: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Skills Match", "Project Analysis", "Experience Analysis"]
        );
        assert_eq!(model.calls(), 3);
    }

    #[tokio::test]
    async fn test_pipeline_keeps_all_titles_when_one_section_fails() {
        // Fail only the skills rubric, identified by its prompt header —
        // robust whatever order the joined futures run in.
        let model = ScriptedModel::from_fn(|_, prompt| {
            if prompt.contains("**Skills Match Evaluation**") {
                Err(ModelError::EmptyResponse)
            } else {
                Ok("fine".to_string())
            }
        });

        let report = run_pipeline("a.pdf", "text", "jd", &model).await;
        let titles: Vec<&str> = report.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Skills Match", "Project Analysis", "Experience Analysis"]
        );
        assert!(!report.sections[0].outcome.is_ok());
        assert!(report.sections[1].outcome.is_ok());
        assert!(report.sections[2].outcome.is_ok());
    }

    #[tokio::test]
    async fn test_pipeline_keeps_all_titles_when_every_call_fails() {
        let model = ScriptedModel::always_failing("backend down");
        let report = run_pipeline("a.pdf", "text", "jd", &model).await;
        assert_eq!(report.sections.len(), 3);
        assert!(report.sections.iter().all(|s| !s.outcome.is_ok()));
        assert_eq!(report.sections[1].name, "Project Analysis");
    }

    #[tokio::test]
    async fn test_submission_costs_three_n_plus_one_calls() {
        let model = ScriptedModel::always_ok("fine");
        let (reports, ranking) = evaluate_submission(&inputs(2), "jd", &model).await;
        assert_eq!(reports.len(), 2);
        assert!(ranking.is_ok());
        assert_eq!(model.calls(), 3 * 2 + 1);
    }

    #[tokio::test]
    async fn test_submission_with_one_resume_costs_four_calls() {
        let model = ScriptedModel::always_ok("fine");
        let (reports, _) = evaluate_submission(&inputs(1), "jd", &model).await;
        assert_eq!(reports.len(), 1);
        assert_eq!(model.calls(), 4);
    }

    #[tokio::test]
    async fn test_section_failures_do_not_stop_later_resumes_or_ranking() {
        // Every section call fails; the ranking call succeeds.
        let model = ScriptedModel::from_fn(|_, prompt| {
            if prompt.contains("ranking a list of resumes") {
                Ok("| Rank | ... |".to_string())
            } else {
                Err(ModelError::Api {
                    status: 500,
                    message: "internal".to_string(),
                })
            }
        });

        let (reports, ranking) = evaluate_submission(&inputs(3), "jd", &model).await;
        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert_eq!(report.sections.len(), 3);
            assert!(report.sections.iter().all(|s| !s.outcome.is_ok()));
        }
        assert!(ranking.is_ok());
        assert_eq!(model.calls(), 3 * 3 + 1);
    }
}
