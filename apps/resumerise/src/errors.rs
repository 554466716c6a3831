use thiserror::Error;

/// Shown for every failed analysis. Underlying details only go to the log.
pub const FAILURE_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// Error raised while scoring a submission.
///
/// Every variant ends in the same `Failure` state; the split exists for the log.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Scoring service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not read resume '{name}': {source}")]
    ResumeRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Coarse category, used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
}

impl MatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatchError::Http(_) | MatchError::Status { .. } | MatchError::ResumeRead { .. } => {
                ErrorKind::Transport
            }
            MatchError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Logs the underlying error and returns the text the user gets to see.
    pub fn into_user_message(self) -> String {
        match &self {
            MatchError::Http(e) => tracing::error!("Scoring transport error: {e}"),
            MatchError::Status { status, body } => {
                tracing::error!("Scoring service returned {status}: {body}")
            }
            MatchError::ResumeRead { name, source } => {
                tracing::error!("Failed to read resume {name}: {source}")
            }
            MatchError::MalformedResponse(msg) => {
                tracing::error!("Malformed scoring response: {msg}")
            }
        }
        FAILURE_MESSAGE.to_string()
    }
}
