mod engagements;
mod time_entries;

pub use engagements::EngagementRepository;
pub use time_entries::TimeEntryRepository;
