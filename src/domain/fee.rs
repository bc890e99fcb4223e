// src/domain/fee.rs

use chrono::NaiveDate;
use serde::Deserialize;

use super::user::UserRole;

labelled_enum! {
    pub enum FeeStatus {
        Paid => ("Paid", "paid"),
        Unpaid => ("Unpaid", "unpaid"),
        Overdue => ("Overdue", "overdue"),
    }
}

impl FeeStatus {
    pub fn option_label(self) -> &'static str {
        match self {
            FeeStatus::Paid => "Mark Paid",
            other => other.as_str(),
        }
    }
}

/// Payment options shown in the checkout dialog. None of them move money;
/// picking any one marks the fee as paid.
pub const PAYMENT_GATEWAYS: [&str; 4] = ["GCash", "Maya", "Credit Card", "Bank Transfer"];

#[derive(Debug, Clone, Deserialize)]
pub struct FeeRecord {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(rename = "type")]
    pub fee_type: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: FeeStatus,
}

impl FeeRecord {
    pub fn is_paid(&self) -> bool {
        self.status == FeeStatus::Paid
    }

    pub fn invoice_number(&self) -> String {
        format!("INV-{}", self.id)
    }
}

/// Residents only see their own fees; officers see the whole community.
/// Collection order is preserved either way.
pub fn visible_fees<'a>(fees: &'a [FeeRecord], role: UserRole, user_id: &str) -> Vec<&'a FeeRecord> {
    match role {
        UserRole::Resident => fees.iter().filter(|f| f.user_id == user_id).collect(),
        UserRole::Officer => fees.iter().collect(),
    }
}

/// Adds up amounts. Starts from `+0.0` so an empty set never yields `-0.0`.
pub fn sum_amounts(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.fold(0.0, |acc, amount| acc + amount)
}

/// Sum of everything not yet paid.
pub fn outstanding_balance(fees: &[&FeeRecord]) -> f64 {
    sum_amounts(fees.iter().filter(|f| !f.is_paid()).map(|f| f.amount))
}

/// Target of the resident's "Pay Outstanding" shortcut.
pub fn first_unpaid<'a>(fees: &[&'a FeeRecord]) -> Option<&'a FeeRecord> {
    fees.iter().copied().find(|f| !f.is_paid())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeSummary {
    pub total: f64,
    pub collected: f64,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub overdue_count: usize,
}

impl FeeSummary {
    pub fn from_fees(fees: &[FeeRecord]) -> Self {
        let count = |status: FeeStatus| fees.iter().filter(|f| f.status == status).count();

        FeeSummary {
            total: sum_amounts(fees.iter().map(|f| f.amount)),
            collected: sum_amounts(fees.iter().filter(|f| f.is_paid()).map(|f| f.amount)),
            paid_count: count(FeeStatus::Paid),
            unpaid_count: count(FeeStatus::Unpaid),
            overdue_count: count(FeeStatus::Overdue),
        }
    }

    pub fn outstanding(&self) -> f64 {
        self.total - self.collected
    }

    /// Share of billed money collected, 0-100. An empty ledger reports 0.
    pub fn collection_rate_fraction(&self) -> f64 {
        if self.total <= 0.0 {
            0.0
        } else {
            self.collected / self.total * 100.0
        }
    }

    pub fn collection_rate(&self) -> u32 {
        self.collection_rate_fraction().round() as u32
    }
}
