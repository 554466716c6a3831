//! Raw form inputs: the selected resume and the job description text.

use std::path::{Path, PathBuf};

use bytes::Bytes;

#[derive(Debug, Clone, PartialEq)]
enum ArtifactSource {
    File(PathBuf),
    Memory(Bytes),
}

/// Handle to a resume the user picked. Opaque to the client; the contents are
/// read once, when a request is serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeArtifact {
    file_name: String,
    source: ArtifactSource,
}

impl ResumeArtifact {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        Self {
            file_name,
            source: ArtifactSource::File(path),
        }
    }

    pub fn from_bytes(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            source: ArtifactSource::Memory(content.into()),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ArtifactSource::File(path) => Some(path),
            ArtifactSource::Memory(_) => None,
        }
    }

    /// Content type sent with the upload. Only a hint: the service decides
    /// what it accepts.
    pub fn mime_type(&self) -> &'static str {
        let is_pdf = Path::new(&self.file_name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            "application/pdf"
        } else {
            "application/octet-stream"
        }
    }

    pub async fn read(&self) -> std::io::Result<Bytes> {
        match &self.source {
            ArtifactSource::File(path) => tokio::fs::read(path).await.map(Bytes::from),
            ArtifactSource::Memory(content) => Ok(content.clone()),
        }
    }
}

/// The two raw inputs of the match form. Fields are independent; nothing is
/// checked until a submission is attempted.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    resume: Option<ResumeArtifact>,
    job_text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously selected resume.
    pub fn set_resume(&mut self, artifact: ResumeArtifact) {
        self.resume = Some(artifact);
    }

    /// Stored verbatim, no trimming.
    pub fn set_job_text(&mut self, text: impl Into<String>) {
        self.job_text = text.into();
    }

    pub fn resume(&self) -> Option<&ResumeArtifact> {
        self.resume.as_ref()
    }

    pub fn job_text(&self) -> &str {
        &self.job_text
    }
}
