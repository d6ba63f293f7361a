//! Externally supplied chart series.
//!
//! The firm-level figures (utilization split, revenue vs target, AR aging,
//! departmental hours) come from an upstream data feed, not from the
//! engagement or time-entry collections; the dashboard only displays them.
//! Each series is shaped for the charting boundary: flat records of labels
//! and values.

use serde::Serialize;

/// A single labeled value in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One month of realized revenue against target, in thousands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: String,
    pub target: f64,
    pub realized: f64,
}

/// One accounts-receivable aging bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingBucket {
    pub range: String,
    pub amount: f64,
}

/// Billable vs non-billable hours for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentHours {
    pub department: String,
    pub billable: f64,
    pub non_billable: f64,
}

/// Firm-wide billable/non-billable utilization split, in percent.
pub fn utilization_split() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Billable", 75.0),
        ChartPoint::new("Non-Billable", 25.0),
    ]
}

/// Monthly revenue against target, year to date.
pub fn monthly_revenue() -> Vec<RevenuePoint> {
    [
        ("Jan", 400.0, 380.0),
        ("Feb", 420.0, 430.0),
        ("Mar", 450.0, 410.0),
        ("Apr", 450.0, 460.0),
        ("May", 480.0, 475.0),
    ]
    .into_iter()
    .map(|(month, target, realized)| RevenuePoint {
        month: month.to_string(),
        target,
        realized,
    })
    .collect()
}

/// Outstanding receivables bucketed by days overdue.
pub fn aging_receivables() -> Vec<AgingBucket> {
    [
        ("0-30 Days", 120000.0),
        ("31-60 Days", 45000.0),
        ("> 60 Days", 15000.0),
    ]
    .into_iter()
    .map(|(range, amount)| AgingBucket {
        range: range.to_string(),
        amount,
    })
    .collect()
}

/// Billable vs non-billable hours per department.
pub fn department_hours() -> Vec<DepartmentHours> {
    [
        ("Audit", 3200.0, 450.0),
        ("Tax", 2100.0, 300.0),
        ("Advisory", 1500.0, 600.0),
        ("Forensic", 800.0, 120.0),
        ("Support", 0.0, 1200.0),
    ]
    .into_iter()
    .map(|(department, billable, non_billable)| DepartmentHours {
        department: department.to_string(),
        billable,
        non_billable,
    })
    .collect()
}
