// src/domain/dashboard.rs

use super::announcement::Announcement;
use super::complaint::{Complaint, RequestType};
use super::fee::{sum_amounts, FeeRecord, FeeStatus};

/// Headline numbers on the officer dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct OfficerKpis {
    pub total_collected: f64,
    pub active_requests: usize,
    pub overdue_payments: usize,
    pub total_notices: usize,
}

impl OfficerKpis {
    pub fn compute(fees: &[FeeRecord], complaints: &[Complaint], announcements: &[Announcement]) -> Self {
        OfficerKpis {
            total_collected: sum_amounts(fees.iter().filter(|f| f.is_paid()).map(|f| f.amount)),
            active_requests: complaints.iter().filter(|c| c.status.is_active()).count(),
            overdue_payments: fees.iter().filter(|f| f.status == FeeStatus::Overdue).count(),
            total_notices: announcements.len(),
        }
    }
}

fn paid_total(fees: &[FeeRecord], pred: impl Fn(&FeeRecord) -> bool) -> f64 {
    sum_amounts(fees.iter().filter(|f| f.is_paid() && pred(f)).map(|f| f.amount))
}

/// Paid amounts grouped into dues, security and everything else.
pub fn collection_breakdown(fees: &[FeeRecord]) -> Vec<(&'static str, f64)> {
    vec![
        ("Monthly Dues", paid_total(fees, |f| f.fee_type == "Monthly Dues")),
        ("Security", paid_total(fees, |f| f.fee_type == "Security Fee")),
        (
            "Others",
            paid_total(fees, |f| f.fee_type != "Monthly Dues" && f.fee_type != "Security Fee"),
        ),
    ]
}

/// Request counts per category, skipping empty ones.
/// Plain "Complaint" entries are not part of the chart.
pub fn request_distribution(complaints: &[Complaint]) -> Vec<(RequestType, usize)> {
    [
        RequestType::Maintenance,
        RequestType::Security,
        RequestType::Admin,
        RequestType::Landscaping,
    ]
    .into_iter()
    .map(|kind| (kind, complaints.iter().filter(|c| c.request_type == kind).count()))
    .filter(|(_, n)| *n > 0)
    .collect()
}
