use chrono::NaiveDate;

use crate::domain::fee::{visible_fees, PAYMENT_GATEWAYS};
use crate::domain::{FeeStatus, FeeSummary, Tab, UserRole};
use crate::errors::ServerError;
use crate::handlers::{required_choice, text, Params};
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::spreadsheets::export_fees_xlsx;
use crate::store::fees::{pay_fee, update_fee_status};
use crate::store::session::set_active_tab;
use crate::store::state::require_role;
use crate::store::Store;
use crate::templates::pages::{fees_page, FeesVm};

pub fn list(store: &Store, query: &Params) -> ResultResp {
    let pay_id = query.get("pay").map(|v| v.trim().to_string());

    let page = store.with_state(|state| {
        set_active_tab(state, Tab::Fees);

        let fees = visible_fees(&state.fees, state.user.role, &state.user.id);
        // Only residents check out, and only fees on their own list.
        let paying = match (&pay_id, state.user.role) {
            (Some(id), UserRole::Resident) => fees.iter().copied().find(|f| &f.id == id && !f.is_paid()),
            _ => None,
        };

        Ok(fees_page(&FeesVm {
            user: &state.user,
            summary: FeeSummary::from_fees(&state.fees),
            fees,
            paying,
        }))
    })?;

    html_response(page)
}

pub fn export(store: &Store, today: NaiveDate) -> ResultResp {
    store.with_state(|state| {
        require_role(&state.user, UserRole::Officer, "export fee records")?;
        let fees: Vec<_> = state.fees.iter().collect();
        export_fees_xlsx(&fees, today)
    })
}

pub fn update_status(store: &Store, id: &str, form: &Params) -> ResultResp {
    let status = required_choice(form, "status", FeeStatus::parse)?;

    store.with_state(|state| update_fee_status(state, id, status))?;
    redirect_response("/fees")
}

pub fn pay(store: &Store, id: &str, form: &Params) -> ResultResp {
    let gateway = text(form, "gateway");
    let gateway = match gateway.trim() {
        "" => PAYMENT_GATEWAYS[0],
        raw => PAYMENT_GATEWAYS
            .into_iter()
            .find(|g| g.eq_ignore_ascii_case(raw))
            .ok_or_else(|| ServerError::BadRequest(format!("unknown payment method `{raw}`")))?,
    };

    store.with_state(|state| pay_fee(state, id, gateway))?;
    redirect_response("/fees")
}
