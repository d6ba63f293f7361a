use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{ClientId, EngagementId, ValidationError};

/// Lifecycle status of a client engagement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EngagementStatus {
    Active,
    Pending,
    Closed,
}

/// A client contract tracked for billing.
///
/// Engagements are created through [`EngagementDraft`] and are never updated
/// or deleted afterwards. `remaining_value` is fixed at creation; nothing in
/// the system consumes the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub id: EngagementId,
    pub client_id: ClientId,
    pub client_name: String,
    pub engagement_name: String,
    pub partner_in_charge: String,
    /// Total contract value, non-negative, immutable after creation.
    pub contract_value: f64,
    /// Unconsumed portion of the contract. Invariant:
    /// `0 <= remaining_value <= contract_value`.
    pub remaining_value: f64,
    pub status: EngagementStatus,
}

/// Form payload for creating an engagement.
///
/// Fields arrive as the form posts them: plain strings, with an empty string
/// meaning the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementDraft {
    pub client_name: String,
    pub engagement_name: String,
    pub partner_in_charge: String,
    pub contract_value: String,
}

impl Engagement {
    /// Validate a draft and construct the engagement it describes.
    ///
    /// `year` and `seq` feed the generated register id. On success the new
    /// engagement starts `Pending` with the full contract value remaining and
    /// an "Unassigned" partner when none was given. Rejects with
    /// [`ValidationError::MissingField`] when a required field is blank and
    /// [`ValidationError::InvalidNumber`] when the contract value does not
    /// parse as a finite non-negative number.
    pub fn from_draft(
        draft: &EngagementDraft,
        year: i32,
        seq: u32,
    ) -> Result<Self, ValidationError> {
        if draft.client_name.is_empty() {
            return Err(ValidationError::MissingField("client name"));
        }
        if draft.engagement_name.is_empty() {
            return Err(ValidationError::MissingField("engagement name"));
        }
        if draft.contract_value.is_empty() {
            return Err(ValidationError::MissingField("contract value"));
        }

        let contract_value: f64 = draft
            .contract_value
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| ValidationError::InvalidNumber {
                field: "contract value",
                value: draft.contract_value.clone(),
            })?;

        let partner_in_charge = if draft.partner_in_charge.is_empty() {
            "Unassigned".to_string()
        } else {
            draft.partner_in_charge.clone()
        };

        Ok(Self {
            id: EngagementId::from_parts(year, seq),
            client_id: ClientId::generate(),
            client_name: draft.client_name.clone(),
            engagement_name: draft.engagement_name.clone(),
            partner_in_charge,
            contract_value,
            remaining_value: contract_value,
            status: EngagementStatus::Pending,
        })
    }
}

/// Lookup seam for resolving engagement references, e.g. when joining time
/// entries to the engagement they are billed to.
pub trait EngagementDirectory {
    fn find(&self, id: &EngagementId) -> Option<Engagement>;
}
