use crate::domain::Tab;
use crate::responses::{html_response, ResultResp};
use crate::store::session::set_active_tab;
use crate::store::Store;
use crate::templates::pages::board_page;

pub fn show(store: &Store) -> ResultResp {
    let page = store.with_state(|state| {
        set_active_tab(state, Tab::Board);
        Ok(board_page(&state.user, &state.board_members))
    })?;
    html_response(page)
}
