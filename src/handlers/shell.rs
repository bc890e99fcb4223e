use crate::responses::{redirect_response, ResultResp};
use crate::store::session::switch_role;
use crate::store::Store;

/// `/` lands on whatever tab was last open.
pub fn root(store: &Store) -> ResultResp {
    let tab = store.with_state(|state| Ok(state.active_tab))?;
    redirect_response(&tab.path())
}

pub fn switch(store: &Store) -> ResultResp {
    let (_, tab) = store.with_state(|state| Ok(switch_role(state)))?;
    redirect_response(&tab.path())
}
