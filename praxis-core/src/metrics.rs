use serde::Serialize;

use crate::Engagement;

/// Budget-used percentage above which an engagement is displayed as running
/// hot (amber instead of emerald).
pub const BUDGET_HIGH_WATERMARK: u8 = 80;

/// How much of an engagement's contract has been consumed, as a whole
/// percentage.
///
/// Total for every invariant-respecting engagement: a zero-value contract
/// yields 0% with the `degenerate` flag set instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub percent: u8,
    /// Set when the contract value is zero and the percentage is therefore
    /// meaningless.
    pub degenerate: bool,
}

impl BudgetUsage {
    pub fn of(engagement: &Engagement) -> Self {
        if engagement.contract_value == 0.0 {
            return Self {
                percent: 0,
                degenerate: true,
            };
        }

        let consumed = engagement.contract_value - engagement.remaining_value;
        let percent = (consumed / engagement.contract_value * 100.0).round();
        Self {
            percent: percent.clamp(0.0, 100.0) as u8,
            degenerate: false,
        }
    }

    /// Display policy: flag usage above [`BUDGET_HIGH_WATERMARK`].
    pub fn is_high(&self) -> bool {
        self.percent > BUDGET_HIGH_WATERMARK
    }
}
