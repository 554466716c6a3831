//! Interactive terminal front-end for the match screen.
//!
//! Two event sources feed the page: input lines and the one in-flight scoring
//! call. Both are awaited on the same task, so the form stays editable while
//! a request runs.

pub mod commands;
pub mod render;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;
use uuid::Uuid;

use crate::errors::MatchError;
use crate::matching::input::ResumeArtifact;
use crate::matching::page::{Command, MatchPage, Msg};
use crate::matching::presenter::present_form;
use crate::models::match_result::ResultModel;
use crate::scoring_client::ScoringService;

use commands::{LineReader, ShellCommand, HELP};

type PendingScore =
    Pin<Box<dyn Future<Output = (Uuid, Result<ResultModel, MatchError>)> + Send>>;

struct Shell<W> {
    page: MatchPage,
    service: Arc<dyn ScoringService>,
    in_flight: Option<PendingScore>,
    out: W,
}

impl<W: AsyncWrite + Unpin> Shell<W> {
    async fn print(&mut self, text: &str) -> anyhow::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n").await?;
        }
        self.out.flush().await?;
        Ok(())
    }

    async fn redraw(&mut self) -> anyhow::Result<()> {
        let text = render::render_form(&present_form(&self.page));
        self.print(&text).await
    }

    /// Returns `false` when the user asked to quit.
    async fn handle(&mut self, command: ShellCommand) -> anyhow::Result<bool> {
        match command {
            ShellCommand::Resume(path) => {
                self.page
                    .update(Msg::ResumeSelected(ResumeArtifact::from_path(path)));
                self.redraw().await?;
            }
            ShellCommand::Job(text) => {
                self.page.update(Msg::JobTextChanged(text));
                self.redraw().await?;
            }
            ShellCommand::Submit => match self.page.update(Msg::SubmitClicked) {
                Command::Score(request) => {
                    let service = Arc::clone(&self.service);
                    let submission_id = request.submission_id;
                    self.in_flight = Some(Box::pin(async move {
                        (submission_id, service.score(request).await)
                    }));
                    self.redraw().await?;
                }
                Command::Notify(text) => self.print(&format!("⚠ {text}")).await?,
                Command::None => self.print("Analysis already in progress").await?,
            },
            ShellCommand::Show => self.redraw().await?,
            ShellCommand::Dismiss => {
                self.page.update(Msg::Dismissed);
                self.redraw().await?;
            }
            ShellCommand::Help => self.print(HELP).await?,
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Invalid(message) => self.print(&message).await?,
        }
        Ok(true)
    }

    async fn deliver(
        &mut self,
        submission_id: Uuid,
        outcome: Result<ResultModel, MatchError>,
    ) -> anyhow::Result<()> {
        self.in_flight = None;
        self.page.update(Msg::ResponseArrived {
            submission_id,
            outcome,
        });
        self.redraw().await
    }
}

async fn wait_for(pending: &mut Option<PendingScore>) -> (Uuid, Result<ResultModel, MatchError>) {
    match pending {
        Some(score) => score.await,
        None => std::future::pending().await,
    }
}

/// Runs the match form until `quit` or end of input. A request still in
/// flight at end of input is awaited and its result shown.
pub async fn run<R, W>(service: Arc<dyn ScoringService>, input: R, out: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut shell = Shell {
        page: MatchPage::mount(),
        service,
        in_flight: None,
        out,
    };
    let mut lines = input.lines();
    let mut reader = LineReader::default();

    shell.print(HELP).await?;
    shell.redraw().await?;

    loop {
        tokio::select! {
            (submission_id, outcome) = wait_for(&mut shell.in_flight) => {
                shell.deliver(submission_id, outcome).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    if let Some(pending) = shell.in_flight.take() {
                        let (submission_id, outcome) = pending.await;
                        shell.deliver(submission_id, outcome).await?;
                    }
                    break;
                };
                if let Some(command) = reader.feed(&line) {
                    if !shell.handle(command).await? {
                        break;
                    }
                }
            }
        }
    }

    info!("Match screen closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::scoring_client::ScoreRequest;

    struct FixedService {
        calls: AtomicUsize,
        hang: bool,
    }

    impl FixedService {
        fn new(hang: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                hang,
            })
        }
    }

    #[async_trait]
    impl ScoringService for FixedService {
        async fn score(&self, request: ScoreRequest) -> Result<ResultModel, MatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(request.job_text, "Python developer\nSQL and Docker");
            if self.hang {
                std::future::pending::<()>().await;
            }
            Ok(ResultModel::for_tests(82, 77.5, &["SQL", "Docker"]))
        }
    }

    async fn run_script(service: Arc<FixedService>, script: &str) -> String {
        let mut out = Vec::new();
        run(service, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_submit_and_show_result() {
        let service = FixedService::new(false);
        let output = run_script(
            service.clone(),
            "resume cv.pdf\njob\nPython developer\nSQL and Docker\n.\nsubmit\n",
        )
        .await;

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        assert!(output.contains("⏳ Analyzing..."));
        assert!(output.contains("] 82%"));
        assert!(output.contains("] 77.50"));
        assert!(output.contains("• SQL"));
    }

    #[tokio::test]
    async fn test_submit_without_inputs_shows_notice() {
        let service = FixedService::new(false);
        let output = run_script(service.clone(), "submit\nquit\n").await;

        assert!(output.contains("⚠ Please upload a resume and paste job description"));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_refused() {
        let service = FixedService::new(true);
        let output = run_script(
            service.clone(),
            "resume cv.pdf\njob\nPython developer\nSQL and Docker\n.\nsubmit\nsubmit\nquit\n",
        )
        .await;

        assert!(output.contains("Analysis already in progress"));
        assert!(service.calls.load(Ordering::SeqCst) <= 1);
        assert!(!output.contains("] 82%"));
    }
}
