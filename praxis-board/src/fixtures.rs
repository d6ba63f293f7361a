//! Seed data the dashboard loads with.
//!
//! Everything here is session-local mock data; a page reload rebuilds the
//! state from these records.

use chrono::NaiveDate;
use praxis_core::{
    ActivityType, BillingTarget, ClientId, Engagement, EngagementId, EngagementStatus, EntryId,
    Staff, StaffId, TimeEntry,
};

/// The signed-in staff member.
pub fn current_user() -> Staff {
    Staff {
        id: StaffId::from("EMP-001"),
        full_name: "Poa Yosia".to_string(),
        department: "Audit Assurance".to_string(),
        billable_rate: 250.0,
    }
}

/// The four seeded engagements, newest first.
pub fn engagements() -> Vec<Engagement> {
    vec![
        Engagement {
            id: EngagementId::from("ENG-2024-001"),
            client_id: ClientId::from("CLT-505"),
            client_name: "Megacorp Industries".to_string(),
            engagement_name: "Annual Audit 2023".to_string(),
            partner_in_charge: "Sarah Jenkins".to_string(),
            contract_value: 150000.0,
            remaining_value: 45000.0,
            status: EngagementStatus::Active,
        },
        Engagement {
            id: EngagementId::from("ENG-2024-002"),
            client_id: ClientId::from("CLT-102"),
            client_name: "TechNova Solutions".to_string(),
            engagement_name: "Tax Advisory Q1".to_string(),
            partner_in_charge: "Michael Ross".to_string(),
            contract_value: 35000.0,
            remaining_value: 12000.0,
            status: EngagementStatus::Active,
        },
        Engagement {
            id: EngagementId::from("ENG-2024-003"),
            client_id: ClientId::from("CLT-889"),
            client_name: "GreenLeaf Retail".to_string(),
            engagement_name: "Due Diligence - Merger".to_string(),
            partner_in_charge: "Sarah Jenkins".to_string(),
            contract_value: 75000.0,
            remaining_value: 70000.0,
            status: EngagementStatus::Pending,
        },
        Engagement {
            id: EngagementId::from("ENG-2024-004"),
            client_id: ClientId::from("CLT-404"),
            client_name: "Oceanic Shipping".to_string(),
            engagement_name: "Forensic Audit".to_string(),
            partner_in_charge: "David Kim".to_string(),
            contract_value: 200000.0,
            remaining_value: 0.0,
            status: EngagementStatus::Closed,
        },
    ]
}

/// The three seeded time entries, newest first.
pub fn time_entries() -> Vec<TimeEntry> {
    vec![
        TimeEntry {
            id: EntryId::from("TE-1001"),
            billed_to: BillingTarget::Engagement(EngagementId::from("ENG-2024-001")),
            date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
            hours_spent: 4.5,
            activity: ActivityType::AuditFieldwork,
            billable: true,
            notes: "Inventory count observation".to_string(),
        },
        TimeEntry {
            id: EntryId::from("TE-1002"),
            billed_to: BillingTarget::Engagement(EngagementId::from("ENG-2024-002")),
            date: NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(),
            hours_spent: 2.0,
            activity: ActivityType::TaxCompliance,
            billable: true,
            notes: "Drafting preliminary tax memo".to_string(),
        },
        TimeEntry {
            id: EntryId::from("TE-1003"),
            billed_to: BillingTarget::Internal,
            date: NaiveDate::from_ymd_opt(2024, 5, 21).unwrap(),
            hours_spent: 1.5,
            activity: ActivityType::InternalAdmin,
            billable: false,
            notes: "Staff meeting".to_string(),
        },
    ]
}
