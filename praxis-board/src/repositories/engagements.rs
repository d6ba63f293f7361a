use chrono::Datelike;

use praxis_core::{
    Engagement, EngagementDirectory, EngagementDraft, EngagementFilter, EngagementId,
    SearchFilter, ValidationError, WatchlistFilter,
};

/// In-memory register of engagements, newest first.
///
/// The register has a single writer (the UI process); reads hand out clones.
/// Engagements are never updated or deleted once created.
#[derive(Debug, Clone, Default)]
pub struct EngagementRepository {
    engagements: Vec<Engagement>,
}

impl EngagementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the register, newest first.
    pub fn with_engagements(mut self, engagements: Vec<Engagement>) -> Self {
        self.engagements = engagements;
        self
    }

    /// Validate a draft and prepend the engagement it describes.
    ///
    /// On rejection the register is left untouched and no register id is
    /// consumed.
    pub fn add(&mut self, draft: &EngagementDraft) -> Result<Engagement, ValidationError> {
        let year = chrono::Local::now().year();
        match Engagement::from_draft(draft, year, self.next_seq(year)) {
            Ok(engagement) => {
                tracing::debug!(id = %engagement.id, client = %engagement.client_name, "engagement created");
                self.engagements.insert(0, engagement.clone());
                Ok(engagement)
            }
            Err(err) => {
                tracing::warn!(%err, "engagement draft rejected");
                Err(err)
            }
        }
    }

    /// Case-insensitive substring search over client name, partner,
    /// engagement name, and id. An empty term returns the full register in
    /// collection order.
    pub fn search(&self, term: &str) -> Vec<Engagement> {
        let filter = SearchFilter::new(term);
        self.engagements
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Engagements flagged for elevated monitoring.
    pub fn watchlist(&self) -> Vec<Engagement> {
        let filter = WatchlistFilter::new();
        self.engagements
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &EngagementId) -> Option<Engagement> {
        self.engagements.iter().find(|e| &e.id == id).cloned()
    }

    pub fn all(&self) -> &[Engagement] {
        &self.engagements
    }

    pub fn len(&self) -> usize {
        self.engagements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engagements.is_empty()
    }

    /// Next free sequence number in the given year's register ids.
    fn next_seq(&self, year: i32) -> u32 {
        self.engagements
            .iter()
            .filter_map(|e| e.id.seq_for_year(year))
            .max()
            .map_or(1, |seq| seq + 1)
    }
}

impl EngagementDirectory for EngagementRepository {
    fn find(&self, id: &EngagementId) -> Option<Engagement> {
        self.get(id)
    }
}
