use serde::{Deserialize, Serialize};

use crate::StaffId;

/// A staff member of the firm.
///
/// Staff records are fixed for the session; there is no lifecycle beyond the
/// initial load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: StaffId,
    pub full_name: String,
    pub department: String,
    /// Hourly billable rate in the firm's currency.
    pub billable_rate: f64,
}

impl Staff {
    pub fn new(
        id: impl Into<StaffId>,
        full_name: impl Into<String>,
        department: impl Into<String>,
        billable_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            department: department.into(),
            billable_rate,
        }
    }
}
