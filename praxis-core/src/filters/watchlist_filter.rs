use super::EngagementFilter;
use crate::Engagement;

/// Selects engagements flagged for elevated monitoring: those whose
/// engagement name mentions strategic work types.
///
/// The substring match is case-sensitive. See DESIGN.md for the open
/// question on whether it should fold case.
#[derive(Debug, Clone, Default)]
pub struct WatchlistFilter;

impl WatchlistFilter {
    const STRATEGIC_WORK: [&'static str; 2] = ["Tax Advisory", "Due Diligence"];

    pub fn new() -> Self {
        Self
    }
}

impl EngagementFilter for WatchlistFilter {
    fn matches(&self, engagement: &Engagement) -> bool {
        Self::STRATEGIC_WORK
            .iter()
            .any(|needle| engagement.engagement_name.contains(needle))
    }
}
