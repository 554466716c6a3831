//! The match screen: inputs plus request state, driven by messages.
//!
//! A `MatchPage` lives exactly as long as the screen is mounted. Front-ends
//! translate user actions into `Msg`, feed them to `update`, and carry out the
//! returned `Command`.

use tracing::debug;
use uuid::Uuid;

use crate::errors::MatchError;
use crate::matching::input::{InputBuffer, ResumeArtifact};
use crate::matching::orchestrator::{RequestOrchestrator, RequestState, SubmitRejection};
use crate::models::match_result::ResultModel;
use crate::scoring_client::ScoreRequest;

#[derive(Debug)]
pub enum Msg {
    ResumeSelected(ResumeArtifact),
    JobTextChanged(String),
    SubmitClicked,
    ResponseArrived {
        submission_id: Uuid,
        outcome: Result<ResultModel, MatchError>,
    },
    Dismissed,
}

/// Work the front-end must perform after an update.
#[derive(Debug)]
pub enum Command {
    None,
    /// Blocking notice for the user; nothing was sent.
    Notify(String),
    /// Send this request and answer with `Msg::ResponseArrived`.
    Score(ScoreRequest),
}

#[derive(Debug, Default)]
pub struct MatchPage {
    inputs: InputBuffer,
    orchestrator: RequestOrchestrator,
}

impl MatchPage {
    pub fn mount() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &InputBuffer {
        &self.inputs
    }

    pub fn state(&self) -> &RequestState {
        self.orchestrator.state()
    }

    pub fn can_submit(&self) -> bool {
        self.orchestrator.can_trigger()
    }

    pub fn update(&mut self, msg: Msg) -> Command {
        match msg {
            Msg::ResumeSelected(artifact) => {
                debug!("Resume selected: {}", artifact.file_name());
                self.inputs.set_resume(artifact);
                Command::None
            }
            Msg::JobTextChanged(text) => {
                self.inputs.set_job_text(text);
                Command::None
            }
            Msg::SubmitClicked => match self.orchestrator.begin(&self.inputs) {
                Ok(request) => Command::Score(request),
                Err(SubmitRejection::Invalid(missing)) => Command::Notify(missing.to_string()),
                // The control is disabled while in flight; a stray click does nothing.
                Err(SubmitRejection::InFlight) => Command::None,
            },
            Msg::ResponseArrived {
                submission_id,
                outcome,
            } => {
                self.orchestrator.complete(submission_id, outcome);
                Command::None
            }
            Msg::Dismissed => {
                self.orchestrator.reset();
                Command::None
            }
        }
    }
}
