//! Scoring client — the single point of entry for calls to the resume scoring service.
//!
//! The service computes both scores and the missing-skill list; this module only
//! ships the inputs and validates what comes back.
//!
//! No retries and no client-side timeout: one submission is exactly one POST,
//! and it runs until the transport stack gives up.

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::MatchError;
use crate::matching::input::ResumeArtifact;
use crate::models::match_result::ResultModel;

pub const ANALYZE_PATH: &str = "/upload-resume";
pub const RESUME_PART: &str = "resume_file";
pub const JOB_TEXT_PART: &str = "job_text";

/// Snapshot of the form taken when a submission starts.
#[derive(Debug, Clone)]
pub struct ScoreRequest {
    pub submission_id: Uuid,
    pub resume: ResumeArtifact,
    pub job_text: String,
}

/// The scoring seam. The orchestrator only ever talks to this trait, so tests
/// can count and script calls without a network.
#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn score(&self, request: ScoreRequest) -> Result<ResultModel, MatchError>;
}

/// `reqwest`-backed client for the remote scoring service.
#[derive(Clone)]
pub struct HttpScoringClient {
    client: Client,
    endpoint: String,
}

impl HttpScoringClient {
    pub fn new(base_url: &str) -> Result<Self, MatchError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: analyze_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(&self, request: ScoreRequest) -> Result<Form, MatchError> {
        let resume = &request.resume;
        let content = resume
            .read()
            .await
            .map_err(|source| MatchError::ResumeRead {
                name: resume.file_name().to_string(),
                source,
            })?;

        let part = Part::bytes(content.to_vec())
            .file_name(resume.file_name().to_string())
            .mime_str(resume.mime_type())?;

        Ok(Form::new()
            .part(RESUME_PART, part)
            .text(JOB_TEXT_PART, request.job_text))
    }
}

#[async_trait]
impl ScoringService for HttpScoringClient {
    async fn score(&self, request: ScoreRequest) -> Result<ResultModel, MatchError> {
        let submission_id = request.submission_id;
        let form = self.build_form(request).await?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        debug!(
            "Scoring response for {submission_id}: status={}, {} bytes",
            status,
            body.len()
        );

        ResultModel::from_json(&body)
    }
}

/// `<base>/upload-resume`, tolerating a trailing slash on the base.
fn analyze_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH)
}
