use super::EngagementFilter;
use crate::Engagement;

/// Case-insensitive substring search over client name, partner in charge,
/// engagement name, and id. An empty term matches everything.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            term: term.as_ref().to_lowercase(),
        }
    }
}

impl EngagementFilter for SearchFilter {
    fn matches(&self, engagement: &Engagement) -> bool {
        engagement.client_name.to_lowercase().contains(&self.term)
            || engagement
                .partner_in_charge
                .to_lowercase()
                .contains(&self.term)
            || engagement
                .engagement_name
                .to_lowercase()
                .contains(&self.term)
            || engagement.id.as_str().to_lowercase().contains(&self.term)
    }
}
