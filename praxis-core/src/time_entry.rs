use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

use crate::{EngagementId, EntryId, ValidationError};

/// Hard cap on hours logged by a single entry.
///
/// The cap applies per entry only; entries for the same day are not
/// aggregated into a combined daily total.
pub const MAX_ENTRY_HOURS: f64 = 12.0;

/// Sentinel engagement reference for work not billed to any client.
pub const INTERNAL_SENTINEL: &str = "INTERNAL";

/// The fixed set of activities hours can be logged against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ActivityType {
    #[serde(rename = "Audit Fieldwork")]
    #[strum(serialize = "Audit Fieldwork")]
    AuditFieldwork,
    #[serde(rename = "Tax Compliance")]
    #[strum(serialize = "Tax Compliance")]
    TaxCompliance,
    #[serde(rename = "Advisory Meeting")]
    #[strum(serialize = "Advisory Meeting")]
    AdvisoryMeeting,
    #[serde(rename = "Internal Admin")]
    #[strum(serialize = "Internal Admin")]
    InternalAdmin,
    #[serde(rename = "Review & QC")]
    #[strum(serialize = "Review & QC")]
    ReviewQc,
}

/// Where a time entry is billed: a client engagement, or internal work.
///
/// Serialized as the raw reference string, with [`INTERNAL_SENTINEL`] marking
/// internal work. An engagement reference is held by value; it is not
/// guaranteed to resolve against the engagement register, and a dangling
/// reference projects as internal/unknown at the view boundary instead of
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BillingTarget {
    Engagement(EngagementId),
    Internal,
}

impl BillingTarget {
    pub fn engagement_id(&self) -> Option<&EngagementId> {
        match self {
            BillingTarget::Engagement(id) => Some(id),
            BillingTarget::Internal => None,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, BillingTarget::Internal)
    }
}

impl fmt::Display for BillingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingTarget::Engagement(id) => write!(f, "{}", id),
            BillingTarget::Internal => write!(f, "{}", INTERNAL_SENTINEL),
        }
    }
}

impl From<&str> for BillingTarget {
    fn from(raw: &str) -> Self {
        if raw == INTERNAL_SENTINEL {
            BillingTarget::Internal
        } else {
            BillingTarget::Engagement(EngagementId::from(raw))
        }
    }
}

impl From<String> for BillingTarget {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<BillingTarget> for String {
    fn from(target: BillingTarget) -> Self {
        target.to_string()
    }
}

/// One logged work period.
///
/// Entries are created through [`TimeEntryDraft`] and are never edited or
/// deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: EntryId,
    #[serde(rename = "engagementId")]
    pub billed_to: BillingTarget,
    pub date: NaiveDate,
    pub hours_spent: f64,
    #[serde(rename = "activityType")]
    pub activity: ActivityType,
    #[serde(rename = "isBillable")]
    pub billable: bool,
    pub notes: String,
}

/// Form payload for logging a time entry.
///
/// `engagement_id` and `hours_spent` arrive as the form posts them (plain
/// strings, empty meaning blank); the activity is already constrained by the
/// form's option list, so a blank selection is `None`. A missing date falls
/// back to today.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeEntryDraft {
    pub engagement_id: String,
    pub date: Option<NaiveDate>,
    pub hours_spent: String,
    pub activity: Option<ActivityType>,
    pub is_billable: bool,
    pub notes: String,
}

impl Default for TimeEntryDraft {
    fn default() -> Self {
        Self {
            engagement_id: String::new(),
            date: None,
            hours_spent: String::new(),
            activity: None,
            is_billable: true,
            notes: String::new(),
        }
    }
}

impl TimeEntry {
    /// Validate a draft and construct the entry it describes.
    ///
    /// The hours cap is checked first: a parseable over-cap value is reported
    /// as [`ValidationError::HoursExceeded`] even while other fields are
    /// still blank. Blank engagement, activity, or hours reject with
    /// [`ValidationError::MissingField`]; hours that do not parse as a finite
    /// positive number reject with [`ValidationError::InvalidNumber`].
    pub fn from_draft(draft: &TimeEntryDraft) -> Result<Self, ValidationError> {
        if let Ok(hours) = draft.hours_spent.trim().parse::<f64>() {
            if hours > MAX_ENTRY_HOURS {
                return Err(ValidationError::HoursExceeded { hours });
            }
        }
        if draft.engagement_id.is_empty() {
            return Err(ValidationError::MissingField("engagement"));
        }
        let activity = draft
            .activity
            .ok_or(ValidationError::MissingField("activity type"))?;
        if draft.hours_spent.is_empty() {
            return Err(ValidationError::MissingField("hours"));
        }

        let hours_spent: f64 = draft
            .hours_spent
            .trim()
            .parse()
            .ok()
            .filter(|h: &f64| h.is_finite() && *h > 0.0)
            .ok_or_else(|| ValidationError::InvalidNumber {
                field: "hours",
                value: draft.hours_spent.clone(),
            })?;

        let date = draft
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        Ok(Self {
            id: EntryId::generate(),
            billed_to: BillingTarget::from(draft.engagement_id.as_str()),
            date,
            hours_spent,
            activity,
            billable: draft.is_billable,
            notes: draft.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn full_draft() -> TimeEntryDraft {
        TimeEntryDraft {
            engagement_id: "ENG-2024-001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 22),
            hours_spent: "4.5".to_string(),
            activity: Some(ActivityType::AuditFieldwork),
            is_billable: true,
            notes: "Inventory count".to_string(),
        }
    }

    #[test]
    fn valid_draft_creates_entry() {
        let entry = TimeEntry::from_draft(&full_draft()).unwrap();

        assert!(entry.id.as_str().starts_with("TE-"));
        assert_eq!(
            entry.billed_to,
            BillingTarget::Engagement(EngagementId::from("ENG-2024-001"))
        );
        assert_eq!(entry.hours_spent, 4.5);
        assert_eq!(entry.activity, ActivityType::AuditFieldwork);
        assert!(entry.billable);
    }

    #[test]
    fn hours_over_cap_are_rejected() {
        let draft = TimeEntryDraft {
            hours_spent: "13".to_string(),
            ..full_draft()
        };
        assert_eq!(
            TimeEntry::from_draft(&draft),
            Err(ValidationError::HoursExceeded { hours: 13.0 })
        );
    }

    #[test]
    fn exactly_twelve_hours_is_accepted() {
        let draft = TimeEntryDraft {
            hours_spent: "12".to_string(),
            ..full_draft()
        };
        assert_eq!(TimeEntry::from_draft(&draft).unwrap().hours_spent, 12.0);
    }

    #[test]
    fn over_cap_hours_win_over_missing_fields() {
        // The cap check runs before field presence, so an over-cap value is
        // reported even on an otherwise blank form.
        let draft = TimeEntryDraft {
            hours_spent: "14".to_string(),
            ..TimeEntryDraft::default()
        };
        assert_eq!(
            TimeEntry::from_draft(&draft),
            Err(ValidationError::HoursExceeded { hours: 14.0 })
        );
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        let blank_engagement = TimeEntryDraft {
            engagement_id: String::new(),
            ..full_draft()
        };
        assert_eq!(
            TimeEntry::from_draft(&blank_engagement),
            Err(ValidationError::MissingField("engagement"))
        );

        let blank_activity = TimeEntryDraft {
            activity: None,
            ..full_draft()
        };
        assert_eq!(
            TimeEntry::from_draft(&blank_activity),
            Err(ValidationError::MissingField("activity type"))
        );

        let blank_hours = TimeEntryDraft {
            hours_spent: String::new(),
            ..full_draft()
        };
        assert_eq!(
            TimeEntry::from_draft(&blank_hours),
            Err(ValidationError::MissingField("hours"))
        );
    }

    #[test]
    fn non_positive_or_unparseable_hours_are_rejected() {
        for bad in ["0", "-2", "2h", "NaN"] {
            let draft = TimeEntryDraft {
                hours_spent: bad.to_string(),
                ..full_draft()
            };
            assert!(
                matches!(
                    TimeEntry::from_draft(&draft),
                    Err(ValidationError::InvalidNumber { .. })
                ),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn internal_sentinel_maps_to_internal_target() {
        let draft = TimeEntryDraft {
            engagement_id: INTERNAL_SENTINEL.to_string(),
            ..full_draft()
        };
        let entry = TimeEntry::from_draft(&draft).unwrap();
        assert!(entry.billed_to.is_internal());
        assert_eq!(entry.billed_to.engagement_id(), None);
    }

    #[test]
    fn activity_labels_round_trip() {
        use std::str::FromStr;

        for activity in ActivityType::iter() {
            assert_eq!(
                ActivityType::from_str(&activity.to_string()).unwrap(),
                activity
            );
        }
        assert_eq!(ActivityType::ReviewQc.to_string(), "Review & QC");
    }

    #[test]
    fn activity_options_list_is_complete_and_ordered() {
        let labels: Vec<String> = ActivityType::iter().map(|a| a.to_string()).collect();
        assert_eq!(
            labels,
            [
                "Audit Fieldwork",
                "Tax Compliance",
                "Advisory Meeting",
                "Internal Admin",
                "Review & QC",
            ]
        );
    }

    #[test]
    fn entry_serializes_with_the_boundary_field_names() {
        let entry = TimeEntry::from_draft(&full_draft()).unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["engagementId"], "ENG-2024-001");
        assert_eq!(json["date"], "2024-05-22");
        assert_eq!(json["hoursSpent"], 4.5);
        assert_eq!(json["activityType"], "Audit Fieldwork");
        assert_eq!(json["isBillable"], true);

        let internal = TimeEntry {
            billed_to: BillingTarget::Internal,
            ..entry
        };
        let json = serde_json::to_value(&internal).unwrap();
        assert_eq!(json["engagementId"], "INTERNAL");
    }
}
