//! View models for the match screen.
//!
//! `present` is a pure function of a `ResultModel`. The two scores get their own
//! indicators and labels; they are never averaged or reconciled.

use crate::matching::orchestrator::RequestState;
use crate::matching::page::MatchPage;
use crate::models::match_result::ResultModel;

pub const TITLE: &str = "Resume Matching";
pub const TAGLINE: &str = "Match your resume against job descriptions instantly!";
pub const SCORES_HEADING: &str = "📊 Match Scores";
pub const SKILLS_HEADING: &str = "❌ Missing Skills";
pub const OVERLAP_LABEL: &str = "Match Score (Overlap):";
pub const MODEL_LABEL: &str = "AI Model Score:";
pub const NO_MISSING_SKILLS: &str = "None";
pub const SUBMIT_LABEL: &str = "⚡ Match Skills";
pub const SUBMITTING_LABEL: &str = "⏳ Analyzing...";

/// A progress bar scaled 0–100.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreIndicator {
    pub label: &'static str,
    pub percent: f64,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillEntry {
    Skill(String),
    /// Rendered when nothing is missing, so the list never shows up empty.
    Placeholder,
}

impl SkillEntry {
    pub fn text(&self) -> &str {
        match self {
            SkillEntry::Skill(skill) => skill,
            SkillEntry::Placeholder => NO_MISSING_SKILLS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub overlap: ScoreIndicator,
    pub model: ScoreIndicator,
    pub missing_skills: Vec<SkillEntry>,
}

pub fn present(result: &ResultModel) -> ResultView {
    let overlap = ScoreIndicator {
        label: OVERLAP_LABEL,
        percent: f64::from(result.overlap_score()),
        display: format!("{}%", result.overlap_score()),
    };
    let model = ScoreIndicator {
        label: MODEL_LABEL,
        percent: result.model_score(),
        display: format!("{:.2}", result.model_score()),
    };

    let missing_skills = if result.missing_skills().is_empty() {
        vec![SkillEntry::Placeholder]
    } else {
        result
            .missing_skills()
            .iter()
            .cloned()
            .map(SkillEntry::Skill)
            .collect()
    };

    ResultView {
        overlap,
        model,
        missing_skills,
    }
}

/// Everything the form shows, derived from the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub resume_name: Option<String>,
    pub job_text: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub error: Option<String>,
    /// Only present after a successful submission.
    pub result: Option<ResultView>,
}

pub fn present_form(page: &MatchPage) -> FormView {
    let (error, result) = match page.state() {
        RequestState::Failure { message } => (Some(message.clone()), None),
        RequestState::Success(result) => (None, Some(present(result))),
        RequestState::Idle | RequestState::Submitting { .. } => (None, None),
    };

    FormView {
        resume_name: page.inputs().resume().map(|r| r.file_name().to_string()),
        job_text: page.inputs().job_text().to_string(),
        submit_label: if page.can_submit() {
            SUBMIT_LABEL
        } else {
            SUBMITTING_LABEL
        },
        submit_enabled: page.can_submit(),
        error,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MatchError;
    use crate::matching::input::ResumeArtifact;
    use crate::matching::page::{Command, Msg};

    #[test]
    fn test_present_scores_and_skills() {
        let view = present(&ResultModel::for_tests(82, 77.5, &["SQL", "Docker"]));

        assert_eq!(view.overlap.label, OVERLAP_LABEL);
        assert_eq!(view.overlap.percent, 82.0);
        assert_eq!(view.overlap.display, "82%");

        assert_eq!(view.model.label, MODEL_LABEL);
        assert_eq!(view.model.percent, 77.5);
        assert_eq!(view.model.display, "77.50");

        assert_eq!(
            view.missing_skills,
            vec![
                SkillEntry::Skill("SQL".to_string()),
                SkillEntry::Skill("Docker".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_skills_render_one_placeholder() {
        let view = present(&ResultModel::for_tests(100, 99.999, &[]));
        assert_eq!(view.missing_skills, vec![SkillEntry::Placeholder]);
        assert_eq!(view.missing_skills[0].text(), "None");
        assert_eq!(view.model.display, "100.00");
    }

    #[test]
    fn test_skill_order_preserved() {
        let skills = ["Kubernetes", "AWS", "Go", "Terraform"];
        let view = present(&ResultModel::for_tests(25, 31.0, &skills));
        let texts: Vec<&str> = view.missing_skills.iter().map(SkillEntry::text).collect();
        assert_eq!(texts, skills);
    }

    #[test]
    fn test_form_while_submitting() {
        let mut page = MatchPage::mount();
        page.update(Msg::ResumeSelected(ResumeArtifact::from_bytes(
            "cv.pdf",
            &b"%PDF"[..],
        )));
        page.update(Msg::JobTextChanged("QA engineer".to_string()));
        let Command::Score(request) = page.update(Msg::SubmitClicked) else {
            panic!("expected a score command");
        };

        let form = present_form(&page);
        assert_eq!(form.submit_label, SUBMITTING_LABEL);
        assert!(!form.submit_enabled);
        assert!(form.result.is_none());

        page.update(Msg::ResponseArrived {
            submission_id: request.submission_id,
            outcome: Err(MatchError::Status {
                status: 500,
                body: String::new(),
            }),
        });
        let form = present_form(&page);
        assert_eq!(form.submit_label, SUBMIT_LABEL);
        assert!(form.submit_enabled);
        assert_eq!(
            form.error.as_deref(),
            Some("Failed to analyze resume. Please try again.")
        );
        assert_eq!(form.resume_name.as_deref(), Some("cv.pdf"));
        assert_eq!(form.job_text, "QA engineer");
    }

    #[test]
    fn test_form_idle() {
        let form = present_form(&MatchPage::mount());
        assert_eq!(form.submit_label, SUBMIT_LABEL);
        assert!(form.submit_enabled);
        assert!(form.resume_name.is_none());
        assert!(form.error.is_none());
        assert!(form.result.is_none());
    }
}
