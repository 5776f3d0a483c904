//! Job polling
//!
//! Repeatedly fetches a job's status snapshot until a terminal state or the
//! attempt budget is exhausted. Fetches are strictly sequential: the next
//! poll is not issued until the previous one resolves. Transport failures
//! consume the same attempt budget as successful non-terminal polls, so a
//! flaky network can exhaust the budget without ever observing a real
//! status. The delay between polls is constant; with the default 60 x 2 s
//! budget the whole sequence is bounded at about two minutes.

use tokio::time::sleep;

use digitext_core::{ClientError, JobStatus, OcrResult, ResultResponse};

use crate::api::UploadFile;
use crate::OcrClient;

/// Observer invoked with every snapshot as it is fetched, terminal or not.
/// Called synchronously in poll order, once per successful fetch, before the
/// terminality check ends the loop.
pub type SnapshotObserver<'a> = &'a mut dyn FnMut(&ResultResponse);

impl OcrClient {
    /// Poll a job until it reaches a terminal status.
    ///
    /// Returns the terminal snapshot: a `failed` job is a normal terminal
    /// outcome and is returned, not raised. Fails with
    /// [`ClientError::JobTimeout`] when the budget runs out with the job
    /// still non-terminal, or [`ClientError::PollingTimeout`] when the final
    /// attempt was consumed by a transport failure. Neither restarts
    /// polling; the caller decides whether to resubmit.
    pub async fn poll_for_results(
        &self,
        job_id: &str,
        mut observer: Option<SnapshotObserver<'_>>,
    ) -> Result<ResultResponse, ClientError> {
        let budget = self.config().max_poll_attempts;
        let interval = self.config().poll_interval;
        let mut attempts: u32 = 0;

        loop {
            match self.fetch_result(job_id).await {
                Ok(snapshot) => {
                    if let Some(callback) = observer.as_deref_mut() {
                        callback(&snapshot);
                    }
                    if snapshot.status.is_terminal() {
                        tracing::info!(job_id, status = %snapshot.status, "Job reached terminal status");
                        return Ok(snapshot);
                    }
                    attempts += 1;
                    tracing::debug!(job_id, status = %snapshot.status, attempt = attempts, "Job still in progress");
                    if attempts >= budget {
                        return Err(ClientError::JobTimeout { attempts });
                    }
                }
                Err(err) => {
                    attempts += 1;
                    tracing::warn!(job_id, error = %err, attempt = attempts, "Status fetch failed");
                    if attempts >= budget {
                        return Err(ClientError::PollingTimeout { attempts });
                    }
                }
            }

            sleep(interval).await;
        }
    }

    /// Submit a batch and await its outcome: upload, then poll to a terminal
    /// snapshot. A completed job yields one result per accepted file; a
    /// failed job becomes [`ClientError::JobFailed`] carrying the server's
    /// message when present.
    pub async fn run_job(
        &self,
        files: Vec<UploadFile>,
        observer: Option<SnapshotObserver<'_>>,
    ) -> Result<Vec<OcrResult>, ClientError> {
        let job = self.upload_files(files).await?;
        let outcome = self.poll_for_results(&job.job_id, observer).await?;

        match outcome.status {
            JobStatus::Completed => Ok(outcome.results),
            // poll_for_results only returns terminal snapshots, so this is
            // the failed branch.
            _ => Err(ClientError::job_failed(outcome.error_message)),
        }
    }
}
