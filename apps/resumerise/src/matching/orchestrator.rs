//! Request lifecycle for the match form.
//!
//! Idle → Submitting → {Success | Failure}, and back to Idle on dismiss.
//! At most one submission is in flight; a second attempt while `Submitting`
//! is rejected before anything is serialized.

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::MatchError;
use crate::matching::input::InputBuffer;
use crate::matching::validation::{self, MissingInput};
use crate::models::match_result::ResultModel;
use crate::scoring_client::{ScoreRequest, ScoringService};

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    /// `previous` is the last successful result, kept but not shown.
    Submitting {
        submission_id: Uuid,
        previous: Option<ResultModel>,
    },
    Success(ResultModel),
    Failure {
        message: String,
    },
}

impl RequestState {
    fn name(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Submitting { .. } => "submitting",
            RequestState::Success(_) => "success",
            RequestState::Failure { .. } => "failure",
        }
    }
}

/// Why a submission attempt did not start. No request is issued in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejection {
    #[error(transparent)]
    Invalid(#[from] MissingInput),

    #[error("A submission is already in progress")]
    InFlight,
}

/// Owns the request state for one mounted match screen.
#[derive(Debug)]
pub struct RequestOrchestrator {
    state: RequestState,
}

impl Default for RequestOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestOrchestrator {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, RequestState::Submitting { .. })
    }

    /// Whether the submit control is enabled.
    pub fn can_trigger(&self) -> bool {
        !self.is_submitting()
    }

    /// Validates the inputs, moves to `Submitting` and returns the payload to send.
    pub fn begin(&mut self, buffer: &InputBuffer) -> Result<ScoreRequest, SubmitRejection> {
        if let RequestState::Submitting { submission_id, .. } = &self.state {
            warn!("Submission rejected: {submission_id} is still in flight");
            return Err(SubmitRejection::InFlight);
        }

        let (resume, job_text) = validation::check(buffer)?;

        let request = ScoreRequest {
            submission_id: Uuid::new_v4(),
            resume: resume.clone(),
            job_text: job_text.to_string(),
        };

        let previous = match std::mem::replace(&mut self.state, RequestState::Idle) {
            RequestState::Success(result) => Some(result),
            _ => None,
        };
        self.transition(RequestState::Submitting {
            submission_id: request.submission_id,
            previous,
        });

        info!(
            "Submitting {} ({} chars of job text) as {}",
            request.resume.file_name(),
            request.job_text.chars().count(),
            request.submission_id
        );

        Ok(request)
    }

    /// Applies the outcome of the in-flight call. Returns `false` and leaves the
    /// state untouched when `submission_id` is not the one in flight.
    pub fn complete(
        &mut self,
        submission_id: Uuid,
        outcome: Result<ResultModel, MatchError>,
    ) -> bool {
        match &self.state {
            RequestState::Submitting {
                submission_id: current,
                ..
            } if *current == submission_id => {}
            other => {
                warn!(
                    "Ignoring response for {submission_id} while {}",
                    other.name()
                );
                return false;
            }
        }

        let next = match outcome {
            Ok(result) => {
                info!(
                    "Submission {submission_id} scored: overlap={}%, model={:.2}, {} missing skills",
                    result.overlap_score(),
                    result.model_score(),
                    result.missing_skills().len()
                );
                RequestState::Success(result)
            }
            Err(e) => RequestState::Failure {
                message: e.into_user_message(),
            },
        };
        self.transition(next);
        true
    }

    /// Runs a whole submission: begin, one call to `service`, complete.
    pub async fn submit(
        &mut self,
        buffer: &InputBuffer,
        service: &dyn ScoringService,
    ) -> Result<&RequestState, SubmitRejection> {
        let request = self.begin(buffer)?;
        let submission_id = request.submission_id;
        let outcome = service.score(request).await;
        self.complete(submission_id, outcome);
        Ok(&self.state)
    }

    /// Dismisses a result or failure. Refused while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.transition(RequestState::Idle);
        true
    }

    fn transition(&mut self, next: RequestState) {
        debug!("Request state: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
