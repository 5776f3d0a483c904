//! Session state with stale-response detection
//!
//! The session owns everything the presentation layer shows: the current job
//! id, results, and error. Polling is never cancelled mid-flight, so a reset
//! while a poll is outstanding means its eventual resolution must be
//! detected and ignored. Each attempt gets an epoch token from
//! [`Session::begin`]; a resolution only applies while its token is still
//! current.

use crate::models::OcrResult;

/// Opaque token identifying one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEpoch(u64);

/// Caller-owned session state. Mutated only through the methods below.
#[derive(Debug, Default)]
pub struct Session {
    epoch: u64,
    job_id: Option<String>,
    results: Option<Vec<OcrResult>>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission attempt: clears prior state and returns the
    /// epoch token the attempt must present when it resolves.
    pub fn begin(&mut self) -> SessionEpoch {
        self.epoch += 1;
        self.job_id = None;
        self.results = None;
        self.error = None;
        SessionEpoch(self.epoch)
    }

    /// User-initiated reset. Bumps the epoch so any outstanding attempt's
    /// resolution becomes stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.job_id = None;
        self.results = None;
        self.error = None;
    }

    pub fn is_current(&self, token: SessionEpoch) -> bool {
        token.0 == self.epoch
    }

    /// Record the job id returned by submission, if the attempt is current.
    pub fn set_job(&mut self, token: SessionEpoch, job_id: String) -> bool {
        if !self.is_current(token) {
            tracing::debug!(job_id = %job_id, "Dropping stale job id after reset");
            return false;
        }
        self.job_id = Some(job_id);
        true
    }

    /// Apply a completed outcome. Returns false (and drops the results) when
    /// the attempt was superseded by a reset.
    pub fn complete(&mut self, token: SessionEpoch, results: Vec<OcrResult>) -> bool {
        if !self.is_current(token) {
            tracing::debug!("Dropping stale completion after reset");
            return false;
        }
        self.results = Some(results);
        self.error = None;
        true
    }

    /// Apply a failed outcome. Same staleness rule as [`Session::complete`].
    pub fn fail(&mut self, token: SessionEpoch, message: String) -> bool {
        if !self.is_current(token) {
            tracing::debug!("Dropping stale failure after reset");
            return false;
        }
        self.error = Some(message);
        self.results = None;
        true
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn results(&self) -> Option<&[OcrResult]> {
        self.results.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(filename: &str) -> OcrResult {
        OcrResult {
            filename: filename.to_string(),
            text: "text".to_string(),
            confidence: 0.9,
            language: "eng".to_string(),
            bbox_data: Vec::new(),
            page_number: None,
        }
    }

    #[test]
    fn current_attempt_applies_its_outcome() {
        let mut session = Session::new();
        let token = session.begin();
        assert!(session.set_job(token, "job-1".to_string()));
        assert!(session.complete(token, vec![result("a.png")]));
        assert_eq!(session.job_id(), Some("job-1"));
        assert_eq!(session.results().unwrap().len(), 1);
    }

    #[test]
    fn resolution_after_reset_is_ignored() {
        let mut session = Session::new();
        let token = session.begin();
        session.set_job(token, "job-1".to_string());

        session.reset();
        assert!(!session.complete(token, vec![result("a.png")]));
        assert!(session.results().is_none());
        assert!(session.job_id().is_none());
    }

    #[test]
    fn a_new_attempt_supersedes_the_previous_one() {
        let mut session = Session::new();
        let stale = session.begin();
        let current = session.begin();

        assert!(!session.fail(stale, "old failure".to_string()));
        assert!(session.complete(current, vec![result("b.pdf")]));
        assert!(session.error().is_none());
        assert_eq!(session.results().unwrap()[0].filename, "b.pdf");
    }

    #[test]
    fn failure_clears_results() {
        let mut session = Session::new();
        let token = session.begin();
        session.complete(token, vec![result("a.png")]);
        session.fail(token, "server exploded".to_string());
        assert!(session.results().is_none());
        assert_eq!(session.error(), Some("server exploded"));
    }
}
