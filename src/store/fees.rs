use crate::domain::{FeeRecord, FeeStatus, UserRole};
use crate::errors::ServerError;
use crate::store::state::{require_role, AppState};

fn find_fee<'a>(state: &'a mut AppState, id: &str) -> Result<&'a mut FeeRecord, ServerError> {
    state
        .fees
        .iter_mut()
        .find(|f| f.id == id)
        .ok_or(ServerError::NotFound)
}

/// Officers may move a fee to any status.
pub fn update_fee_status(state: &mut AppState, id: &str, status: FeeStatus) -> Result<(), ServerError> {
    require_role(&state.user, UserRole::Officer, "change fee status")?;

    let fee = find_fee(state, id)?;
    log::info!("fee {id}: {} -> {status}", fee.status);
    fee.status = status;
    Ok(())
}

/// A resident settling one of their own fees. Always ends in `Paid`.
pub fn pay_fee(state: &mut AppState, id: &str, gateway: &str) -> Result<(), ServerError> {
    require_role(&state.user, UserRole::Resident, "pay fees")?;

    let user_id = state.user.id.clone();
    let fee = find_fee(state, id)?;
    if fee.user_id != user_id {
        log::warn!("{user_id} tried to pay fee {id} owned by {}", fee.user_id);
        return Err(ServerError::Forbidden("you can only pay your own fees".into()));
    }

    log::info!("fee {id} paid by {user_id} via {gateway} ({:.2})", fee.amount);
    fee.status = FeeStatus::Paid;
    Ok(())
}
