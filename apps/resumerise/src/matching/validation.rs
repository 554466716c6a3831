use thiserror::Error;

use crate::matching::input::{InputBuffer, ResumeArtifact};

/// Blocking notice raised when a required input is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please upload a resume and paste job description")]
pub struct MissingInput {
    pub resume: bool,
    pub job_text: bool,
}

/// Checks that both inputs are present and hands them back.
///
/// Job text counts as present when it is non-empty; whitespace-only text is
/// accepted and left for the service to judge.
pub fn check(buffer: &InputBuffer) -> Result<(&ResumeArtifact, &str), MissingInput> {
    let job_text = buffer.job_text();
    match buffer.resume() {
        Some(resume) if !job_text.is_empty() => Ok((resume, job_text)),
        resume => Err(MissingInput {
            resume: resume.is_none(),
            job_text: job_text.is_empty(),
        }),
    }
}

pub fn can_submit(buffer: &InputBuffer) -> bool {
    check(buffer).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(resume: bool, job_text: &str) -> InputBuffer {
        let mut buffer = InputBuffer::new();
        if resume {
            buffer.set_resume(ResumeArtifact::from_bytes("cv.pdf", &b"%PDF"[..]));
        }
        buffer.set_job_text(job_text);
        buffer
    }

    #[test]
    fn test_both_inputs_present() {
        let buffer = buffer(true, "Backend engineer, Rust");
        assert!(can_submit(&buffer));

        let (resume, job_text) = check(&buffer).unwrap();
        assert_eq!(resume.file_name(), "cv.pdf");
        assert_eq!(job_text, "Backend engineer, Rust");
    }

    #[test]
    fn test_missing_resume() {
        let err = check(&buffer(false, "Backend engineer")).unwrap_err();
        assert!(err.resume);
        assert!(!err.job_text);
    }

    #[test]
    fn test_empty_job_text() {
        let err = check(&buffer(true, "")).unwrap_err();
        assert!(!err.resume);
        assert!(err.job_text);
    }

    #[test]
    fn test_nothing_entered() {
        assert_eq!(
            check(&InputBuffer::new()),
            Err(MissingInput {
                resume: true,
                job_text: true
            })
        );
    }

    #[test]
    fn test_whitespace_only_job_text_counts_as_present() {
        assert!(can_submit(&buffer(true, "   \n\t")));
    }

    #[test]
    fn test_notice_text() {
        let err = check(&InputBuffer::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please upload a resume and paste job description"
        );
    }
}
