use chrono::NaiveDate;

use crate::domain::announcement::sorted_and_filtered;
use crate::domain::{AnnouncementCategory, CategoryFilter, Priority, Tab};
use crate::handlers::{choice, flag, text, Params};
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::store::announcements::{add_announcement, NewAnnouncement};
use crate::store::session::set_active_tab;
use crate::store::Store;
use crate::templates::pages::{announcements_page, AnnouncementsVm};

pub fn list(store: &Store, query: &Params) -> ResultResp {
    let filter = choice(query, "category", CategoryFilter::parse, CategoryFilter::All)?;
    let compose = flag(query, "compose");

    let page = store.with_state(|state| {
        set_active_tab(state, Tab::Announcements);
        Ok(announcements_page(&AnnouncementsVm {
            user: &state.user,
            announcements: sorted_and_filtered(&state.announcements, filter),
            filter,
            compose,
        }))
    })?;

    html_response(page)
}

pub fn create(store: &Store, form: &Params, today: NaiveDate) -> ResultResp {
    let new = NewAnnouncement {
        title: text(form, "title"),
        content: text(form, "content"),
        priority: choice(form, "priority", Priority::parse, Priority::Normal)?,
        category: choice(form, "category", AnnouncementCategory::parse, AnnouncementCategory::General)?,
    };

    store.with_state(|state| add_announcement(state, new, today))?;
    redirect_response("/announcements")
}
