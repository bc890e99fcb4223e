use crate::domain::{Announcement, BoardMember, Complaint, FeeRecord, Tab, User, UserRole};
use crate::errors::ServerError;
use crate::store::seed::Seed;

/// Root state container: session user, active tab and the record collections.
#[derive(Debug, Clone)]
pub struct AppState {
    pub user: User,
    pub active_tab: Tab,
    pub announcements: Vec<Announcement>,
    pub complaints: Vec<Complaint>,
    pub fees: Vec<FeeRecord>,
    pub board_members: Vec<BoardMember>,
}

impl AppState {
    pub fn from_seed(seed: Seed) -> Self {
        let active_tab = Tab::home_for(seed.user.role);
        AppState {
            user: seed.user,
            active_tab,
            announcements: seed.announcements,
            complaints: seed.complaints,
            fees: seed.fees,
            board_members: seed.board_members,
        }
    }
}

pub fn require_role(user: &User, role: UserRole, action: &str) -> Result<(), ServerError> {
    if user.role == role {
        Ok(())
    } else {
        log::warn!("{} tried to {action} as {}", user.id, user.role);
        Err(ServerError::Forbidden(format!(
            "only {} users can {action}",
            role.as_str().to_lowercase()
        )))
    }
}

/// Trimmed value of a required text field.
pub fn required(value: &str, field: &str) -> Result<String, ServerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ServerError::BadRequest(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}
