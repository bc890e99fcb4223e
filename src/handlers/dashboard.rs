use crate::domain::Tab;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::store::session::set_active_tab;
use crate::store::Store;
use crate::templates::pages::{dashboard_page, DashboardVm};

/// Officer overview. Residents are bounced to their home tab.
pub fn show(store: &Store) -> ResultResp {
    let (tab, page) = store.with_state(|state| {
        let tab = set_active_tab(state, Tab::Dashboard);
        let page = (tab == Tab::Dashboard).then(|| {
            dashboard_page(&DashboardVm {
                user: &state.user,
                fees: &state.fees,
                complaints: &state.complaints,
                announcements: &state.announcements,
            })
        });
        Ok((tab, page))
    })?;

    match page {
        Some(markup) => html_response(markup),
        None => redirect_response(&tab.path()),
    }
}
