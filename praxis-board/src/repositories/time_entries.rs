use praxis_core::{Engagement, EngagementDirectory, TimeEntry, TimeEntryDraft, ValidationError};

/// In-memory log of time entries, newest first.
///
/// Entries are append-only; nothing edits or deletes a logged period.
#[derive(Debug, Clone, Default)]
pub struct TimeEntryRepository {
    entries: Vec<TimeEntry>,
}

impl TimeEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the log, newest first.
    pub fn with_entries(mut self, entries: Vec<TimeEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Validate a draft and prepend the entry it describes.
    ///
    /// On rejection the log is left untouched.
    pub fn add(&mut self, draft: &TimeEntryDraft) -> Result<TimeEntry, ValidationError> {
        match TimeEntry::from_draft(draft) {
            Ok(entry) => {
                tracing::debug!(id = %entry.id, hours = entry.hours_spent, "time entry recorded");
                self.record(entry.clone());
                Ok(entry)
            }
            Err(err) => {
                tracing::warn!(%err, "time entry draft rejected");
                Err(err)
            }
        }
    }

    /// Prepend an already-validated entry.
    pub fn record(&mut self, entry: TimeEntry) {
        self.entries.insert(0, entry);
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve each entry's billing target against the engagement register,
    /// in log order. Internal work and dangling references resolve to `None`
    /// rather than erroring.
    pub fn list_resolved(
        &self,
        directory: &impl EngagementDirectory,
    ) -> Vec<(TimeEntry, Option<Engagement>)> {
        self.entries
            .iter()
            .map(|entry| {
                let engagement = entry
                    .billed_to
                    .engagement_id()
                    .and_then(|id| directory.find(id));
                (entry.clone(), engagement)
            })
            .collect()
    }
}
