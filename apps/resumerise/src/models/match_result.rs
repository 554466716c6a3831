//! Typed shape of a successful scoring response.
//!
//! The service answers with loosely typed JSON. Nothing reaches the presenter
//! until it has passed `ResultModel::from_json`, so a missing field or a score
//! outside 0..=100 becomes a `MalformedResponse` instead of a blank bar.

use serde::Deserialize;

use crate::errors::MatchError;

/// Wire shape of `POST /upload-resume`. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct MatchResponse {
    match_score_overlap: f64,
    match_score_model: f64,
    missing_skills: Vec<String>,
}

/// Two independent scores for one (resume, job description) pair plus the
/// skills the job asks for that the resume does not show.
///
/// The scores come from different methods and are never combined.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultModel {
    overlap_score: u8,
    model_score: f64,
    missing_skills: Vec<String>,
}

impl ResultModel {
    /// Parses and validates a response body.
    pub fn from_json(body: &[u8]) -> Result<Self, MatchError> {
        let raw: MatchResponse = serde_json::from_slice(body)
            .map_err(|e| MatchError::MalformedResponse(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Literal keyword overlap, whole percent.
    pub fn overlap_score(&self) -> u8 {
        self.overlap_score
    }

    /// Model-derived compatibility, percent.
    pub fn model_score(&self) -> f64 {
        self.model_score
    }

    /// In the order the service returned them.
    pub fn missing_skills(&self) -> &[String] {
        &self.missing_skills
    }
}

impl TryFrom<MatchResponse> for ResultModel {
    type Error = MatchError;

    fn try_from(raw: MatchResponse) -> Result<Self, Self::Error> {
        let overlap = check_percentage("match_score_overlap", raw.match_score_overlap)?;
        if overlap.fract() != 0.0 {
            return Err(MatchError::MalformedResponse(format!(
                "match_score_overlap must be a whole number, got {overlap}"
            )));
        }
        let model_score = check_percentage("match_score_model", raw.match_score_model)?;

        Ok(ResultModel {
            overlap_score: overlap as u8,
            model_score,
            missing_skills: raw.missing_skills,
        })
    }
}

fn check_percentage(field: &str, value: f64) -> Result<f64, MatchError> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(MatchError::MalformedResponse(format!(
            "{field} must be within 0..=100, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
impl ResultModel {
    pub fn for_tests(overlap_score: u8, model_score: f64, missing_skills: &[&str]) -> Self {
        ResultModel {
            overlap_score,
            model_score,
            missing_skills: missing_skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}
