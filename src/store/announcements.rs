// src/store/announcements.rs
use chrono::NaiveDate;

use crate::domain::{Announcement, AnnouncementCategory, Priority, UserRole};
use crate::errors::ServerError;
use crate::store::state::{require_role, required, AppState};

/// Byline stamped on posts made from the dashboard.
pub const OFFICER_AUTHOR: &str = "Officer";

#[derive(Debug, Clone, Default)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub category: AnnouncementCategory,
}

/// Publishes an announcement at the top of the feed and returns its id.
/// The id comes from the collection length, which is only unique because
/// nothing is ever deleted.
pub fn add_announcement(
    state: &mut AppState,
    new: NewAnnouncement,
    today: NaiveDate,
) -> Result<String, ServerError> {
    require_role(&state.user, UserRole::Officer, "post announcements")?;

    let title = required(&new.title, "title")?;
    let content = required(&new.content, "content")?;

    let id = format!("a{}", state.announcements.len() + 1);
    let announcement = Announcement {
        id: id.clone(),
        title,
        content,
        date: today,
        author: OFFICER_AUTHOR.to_string(),
        priority: new.priority,
        category: Some(new.category),
    };

    log::info!(
        "announcement {id} posted ({}, {} priority)",
        new.category,
        new.priority
    );
    state.announcements.insert(0, announcement);
    Ok(id)
}
