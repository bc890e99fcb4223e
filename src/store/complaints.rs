use chrono::NaiveDate;

use crate::domain::{Complaint, ComplaintStatus, RequestType, UserRole};
use crate::errors::ServerError;
use crate::store::state::{require_role, required, AppState};

#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub request_type: RequestType,
}

/// Files a service request on behalf of the session user.
pub fn add_complaint(
    state: &mut AppState,
    new: NewComplaint,
    today: NaiveDate,
) -> Result<String, ServerError> {
    require_role(&state.user, UserRole::Resident, "submit service requests")?;

    let title = required(&new.title, "title")?;
    let description = required(&new.description, "description")?;

    let id = format!("c{}", state.complaints.len() + 1);
    let complaint = Complaint {
        id: id.clone(),
        user_id: state.user.id.clone(),
        user_name: state.user.name.clone(),
        title,
        description,
        request_type: new.request_type,
        status: ComplaintStatus::Pending,
        created_at: today,
        updated_at: today,
    };

    log::info!("{} filed {} request {id}", state.user.id, new.request_type);
    state.complaints.insert(0, complaint);
    Ok(id)
}

pub fn update_complaint_status(
    state: &mut AppState,
    id: &str,
    status: ComplaintStatus,
    today: NaiveDate,
) -> Result<(), ServerError> {
    require_role(&state.user, UserRole::Officer, "change request status")?;

    let complaint = state
        .complaints
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(ServerError::NotFound)?;

    log::info!("request {id}: {} -> {status}", complaint.status);
    complaint.status = status;
    complaint.updated_at = today;
    Ok(())
}
