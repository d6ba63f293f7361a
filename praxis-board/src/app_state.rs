use std::{sync::Arc, time::Duration};

use tokio::sync::RwLock;

use praxis_core::{Engagement, EngagementDraft, Staff, TimeEntry, TimeEntryDraft, ValidationError};

use crate::{
    fixtures, EngagementCard, EngagementRepository, EntryRow, EntrySubmitter, SubmitError,
    TimeEntryRepository, WatchlistRow,
};

/// Shared state of the dashboard session.
///
/// Owns the engagement register and the time-entry log, the signed-in staff
/// record, and the entry submission pipeline. All state is in-memory and
/// session-local; rebuilding via [`AppState::seeded`] is the page-reload
/// semantics.
#[derive(Clone)]
pub struct AppState {
    current_user: Staff,
    engagements: Arc<RwLock<EngagementRepository>>,
    time_entries: Arc<RwLock<TimeEntryRepository>>,
    submitter: EntrySubmitter,
}

impl AppState {
    /// An empty dashboard for the given staff member.
    pub fn new(current_user: Staff) -> Self {
        Self::with_repositories(
            current_user,
            EngagementRepository::new(),
            TimeEntryRepository::new(),
        )
    }

    /// The dashboard as it looks on page load, seeded with the fixture data.
    pub fn seeded() -> Self {
        Self::with_repositories(
            fixtures::current_user(),
            EngagementRepository::new().with_engagements(fixtures::engagements()),
            TimeEntryRepository::new().with_entries(fixtures::time_entries()),
        )
    }

    /// Override the submission round-trip delay.
    pub fn with_submission_delay(mut self, delay: Duration) -> Self {
        self.submitter = EntrySubmitter::new(Arc::clone(&self.time_entries)).with_delay(delay);
        self
    }

    fn with_repositories(
        current_user: Staff,
        engagements: EngagementRepository,
        time_entries: TimeEntryRepository,
    ) -> Self {
        let time_entries = Arc::new(RwLock::new(time_entries));
        Self {
            current_user,
            engagements: Arc::new(RwLock::new(engagements)),
            submitter: EntrySubmitter::new(Arc::clone(&time_entries)),
            time_entries,
        }
    }

    pub fn current_user(&self) -> &Staff {
        &self.current_user
    }

    pub fn submitter(&self) -> &EntrySubmitter {
        &self.submitter
    }

    pub async fn add_engagement(
        &self,
        draft: &EngagementDraft,
    ) -> Result<Engagement, ValidationError> {
        self.engagements.write().await.add(draft)
    }

    pub async fn search_engagements(&self, term: &str) -> Vec<Engagement> {
        self.engagements.read().await.search(term)
    }

    /// The client master grid for the given search term.
    pub async fn engagement_cards(&self, term: &str) -> Vec<EngagementCard> {
        self.engagements
            .read()
            .await
            .search(term)
            .into_iter()
            .map(EngagementCard::from)
            .collect()
    }

    /// Submit a time entry through the simulated round trip.
    pub async fn submit_entry(&self, draft: &TimeEntryDraft) -> Result<TimeEntry, SubmitError> {
        self.submitter.submit(draft).await
    }

    /// The recent entries table, newest first, joined with the engagements
    /// entries are billed to.
    pub async fn entry_rows(&self) -> Vec<EntryRow> {
        let engagements = self.engagements.read().await;
        self.time_entries
            .read()
            .await
            .list_resolved(&*engagements)
            .into_iter()
            .map(EntryRow::from)
            .collect()
    }

    /// The strategic engagement watchlist.
    pub async fn watchlist(&self) -> Vec<WatchlistRow> {
        self.engagements
            .read()
            .await
            .watchlist()
            .iter()
            .map(WatchlistRow::for_engagement)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use praxis_core::ActivityType;

    #[tokio::test]
    async fn seeded_state_answers_the_search_scenario() {
        let state = AppState::seeded();

        let hits = state.search_engagements("sarah").await;
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.partner_in_charge == "Sarah Jenkins"));

        assert_eq!(state.current_user().full_name, "Poa Yosia");
    }

    #[tokio::test]
    async fn added_engagement_shows_up_in_the_cards() {
        let state = AppState::seeded();
        let draft = EngagementDraft {
            client_name: "Acme".to_string(),
            engagement_name: "Audit 2024".to_string(),
            partner_in_charge: String::new(),
            contract_value: "100000".to_string(),
        };

        state.add_engagement(&draft).await.unwrap();

        let cards = state.engagement_cards("acme").await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].budget_used_percent, 0);
    }

    #[tokio::test]
    async fn submitted_entry_appears_joined_in_the_rows() {
        let state = AppState::seeded().with_submission_delay(Duration::from_millis(10));
        let draft = TimeEntryDraft {
            engagement_id: "ENG-2024-001".to_string(),
            hours_spent: "3.5".to_string(),
            activity: Some(ActivityType::ReviewQc),
            ..TimeEntryDraft::default()
        };

        let entry = state.submit_entry(&draft).await.unwrap();

        let rows = state.entry_rows().await;
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].entry, entry);
        assert_eq!(rows[0].client_name.as_deref(), Some("Megacorp Industries"));
    }

    #[tokio::test]
    async fn watchlist_projects_the_two_strategic_engagements() {
        let state = AppState::seeded();

        let watchlist = state.watchlist().await;
        assert_eq!(watchlist.len(), 2);
        assert_eq!(watchlist[0].engagement_name, "Tax Advisory Q1");
        assert_eq!(watchlist[1].engagement_name, "Due Diligence - Merger");
    }
}
