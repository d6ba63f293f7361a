use std::{sync::Arc, time::Duration};

use serde::Serialize;
use tokio::sync::RwLock;

use praxis_core::{TimeEntry, TimeEntryDraft, ValidationError};

use crate::TimeEntryRepository;

/// Where a form submission currently stands.
///
/// `Pending` covers the window between "submit" and "entry visible", during
/// which the form's controls are locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionState {
    Idle,
    Pending,
    Committed,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Submission pipeline for time entries.
///
/// Insertion completes after a simulated round-trip delay. While a
/// submission is pending, further submissions against the same form instance
/// are rejected with [`SubmitError::Busy`]; the pending submission itself
/// cannot be cancelled and always completes.
#[derive(Clone)]
pub struct EntrySubmitter {
    entries: Arc<RwLock<TimeEntryRepository>>,
    state: Arc<RwLock<SubmissionState>>,
    delay: Duration,
}

impl EntrySubmitter {
    /// Simulated round-trip latency between submit and the entry becoming
    /// visible.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

    pub fn new(entries: Arc<RwLock<TimeEntryRepository>>) -> Self {
        Self {
            entries,
            state: Arc::new(RwLock::new(SubmissionState::Idle)),
            delay: Self::DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn state(&self) -> SubmissionState {
        *self.state.read().await
    }

    /// Whether a submission is in flight (the form's controls are locked).
    pub async fn is_busy(&self) -> bool {
        self.state().await == SubmissionState::Pending
    }

    /// Validate the draft and, after the simulated delay, record the entry.
    ///
    /// An invalid draft is rejected synchronously and never locks the form.
    pub async fn submit(&self, draft: &TimeEntryDraft) -> Result<TimeEntry, SubmitError> {
        let entry = {
            let mut state = self.state.write().await;
            if *state == SubmissionState::Pending {
                return Err(SubmitError::Busy);
            }
            let entry = TimeEntry::from_draft(draft).inspect_err(|err| {
                tracing::warn!(%err, "time entry submission rejected");
            })?;
            *state = SubmissionState::Pending;
            entry
        };

        tokio::time::sleep(self.delay).await;

        self.entries.write().await.record(entry.clone());
        *self.state.write().await = SubmissionState::Committed;
        tracing::debug!(id = %entry.id, "time entry committed");

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praxis_core::ActivityType;

    fn draft(hours: &str) -> TimeEntryDraft {
        TimeEntryDraft {
            engagement_id: "ENG-2024-001".to_string(),
            hours_spent: hours.to_string(),
            activity: Some(ActivityType::AuditFieldwork),
            ..TimeEntryDraft::default()
        }
    }

    fn submitter(delay: Duration) -> (EntrySubmitter, Arc<RwLock<TimeEntryRepository>>) {
        let entries = Arc::new(RwLock::new(TimeEntryRepository::new()));
        let submitter = EntrySubmitter::new(Arc::clone(&entries)).with_delay(delay);
        (submitter, entries)
    }

    #[tokio::test]
    async fn submit_commits_after_the_delay() {
        let (submitter, entries) = submitter(Duration::from_millis(10));

        let entry = submitter.submit(&draft("4.5")).await.unwrap();

        assert_eq!(submitter.state().await, SubmissionState::Committed);
        assert_eq!(entries.read().await.entries(), [entry]);
    }

    #[tokio::test]
    async fn concurrent_submission_is_rejected_while_pending() {
        let (submitter, entries) = submitter(Duration::from_millis(100));

        let first = tokio::spawn({
            let submitter = submitter.clone();
            async move { submitter.submit(&draft("4.5")).await }
        });

        // Wait for the first submission to enter the pending window.
        while !submitter.is_busy().await {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let second = submitter.submit(&draft("2.0")).await;
        assert!(matches!(second, Err(SubmitError::Busy)));

        first.await.unwrap().unwrap();
        assert_eq!(entries.read().await.len(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_without_locking_the_form() {
        let (submitter, entries) = submitter(Duration::from_millis(10));

        let err = submitter.submit(&draft("13")).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Invalid(ValidationError::HoursExceeded { .. })
        ));

        assert_eq!(submitter.state().await, SubmissionState::Idle);
        assert!(entries.read().await.is_empty());
    }

    #[tokio::test]
    async fn committed_form_accepts_the_next_submission() {
        let (submitter, entries) = submitter(Duration::from_millis(5));

        submitter.submit(&draft("1.0")).await.unwrap();
        submitter.submit(&draft("2.0")).await.unwrap();

        assert_eq!(entries.read().await.len(), 2);
        assert_eq!(submitter.state().await, SubmissionState::Committed);
    }
}
