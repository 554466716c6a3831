//! Plain-text rendering of the form and result views.

use std::fmt::Write;

use crate::matching::presenter::{
    FormView, ScoreIndicator, SCORES_HEADING, SKILLS_HEADING, TAGLINE, TITLE,
};

const BAR_WIDTH: usize = 30;

/// Fixed-width bar filled in proportion to `percent` (0–100).
pub fn bar(percent: f64, width: usize) -> String {
    let ratio = percent.clamp(0.0, 100.0) / 100.0;
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn indicator(out: &mut String, score: &ScoreIndicator) {
    let _ = writeln!(out, "  {}", score.label);
    let _ = writeln!(out, "  {} {}", bar(score.percent, BAR_WIDTH), score.display);
}

pub fn render_form(view: &FormView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {TITLE} ==");
    let _ = writeln!(out, "{TAGLINE}");
    let _ = writeln!(out);

    let resume = view.resume_name.as_deref().unwrap_or("(none selected)");
    let _ = writeln!(out, "Resume:          {resume}");
    if view.job_text.is_empty() {
        let _ = writeln!(out, "Job description: (empty)");
    } else {
        let _ = writeln!(
            out,
            "Job description: {} chars, {} lines",
            view.job_text.chars().count(),
            view.job_text.lines().count().max(1)
        );
    }

    if view.submit_enabled {
        let _ = writeln!(out, "[ {} ]", view.submit_label);
    } else {
        let _ = writeln!(out, "[ {} ] (disabled)", view.submit_label);
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {error}");
    }

    if let Some(result) = &view.result {
        let _ = writeln!(out);
        let _ = writeln!(out, "{SCORES_HEADING}");
        indicator(&mut out, &result.overlap);
        indicator(&mut out, &result.model);
        let _ = writeln!(out);
        let _ = writeln!(out, "{SKILLS_HEADING}");
        for entry in &result.missing_skills {
            let _ = writeln!(out, "  • {}", entry.text());
        }
    }

    out
}
