// src/store/session.rs
use crate::domain::tab::tab_after_role_switch;
use crate::domain::{Tab, UserRole};
use crate::store::state::AppState;

/// Records the tab being viewed. Residents asking for the dashboard are
/// sent to announcements instead; the returned tab is what was stored.
pub fn set_active_tab(state: &mut AppState, tab: Tab) -> Tab {
    let tab = if tab.visible_to(state.user.role) {
        tab
    } else {
        Tab::home_for(state.user.role)
    };
    state.active_tab = tab;
    tab
}

/// Flips the demo role and moves off tabs the new role should not land on.
pub fn switch_role(state: &mut AppState) -> (UserRole, Tab) {
    let new_role = state.user.role.toggled();
    state.user.role = new_role;
    state.active_tab = tab_after_role_switch(state.active_tab, new_role);

    log::info!("{} switched role to {}", state.user.id, new_role);
    (new_role, state.active_tab)
}
