use chrono::NaiveDate;
use serde::Deserialize;

labelled_enum! {
    pub enum RequestType {
        Maintenance => ("Maintenance", "maintenance"),
        Security => ("Security", "security"),
        Landscaping => ("Landscaping", "landscaping"),
        Complaint => ("Complaint", "complaint"),
        Admin => ("Admin", "admin"),
    }
}

impl Default for RequestType {
    fn default() -> Self {
        RequestType::Complaint
    }
}

impl RequestType {
    /// Types a resident can pick on the service request form.
    pub const SUBMITTABLE: [RequestType; 4] = [
        RequestType::Maintenance,
        RequestType::Security,
        RequestType::Landscaping,
        RequestType::Admin,
    ];
}

labelled_enum! {
    pub enum ComplaintStatus {
        Pending => ("Pending", "pending"),
        InProgress => ("In Progress", "in-progress"),
        Resolved => ("Resolved", "resolved"),
        Closed => ("Closed", "closed"),
    }
}

impl ComplaintStatus {
    /// Wording in the officer's status picker.
    pub fn option_label(self) -> &'static str {
        match self {
            ComplaintStatus::InProgress => "Working",
            other => other.as_str(),
        }
    }

    /// Still needs board attention.
    pub fn is_active(self) -> bool {
        matches!(self, ComplaintStatus::Pending | ComplaintStatus::InProgress)
    }
}

/// A service request or complaint filed by a resident.
#[derive(Debug, Clone, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub request_type: RequestType,
    pub status: ComplaintStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}
