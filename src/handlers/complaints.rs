use chrono::NaiveDate;

use crate::domain::{ComplaintStatus, RequestType, Tab};
use crate::handlers::{choice, flag, required_choice, text, Params};
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::store::complaints::{add_complaint, update_complaint_status, NewComplaint};
use crate::store::session::set_active_tab;
use crate::store::Store;
use crate::templates::pages::{complaints_page, ComplaintsVm};

pub fn list(store: &Store, query: &Params) -> ResultResp {
    let compose = flag(query, "compose");

    let page = store.with_state(|state| {
        set_active_tab(state, Tab::Complaints);
        Ok(complaints_page(&ComplaintsVm {
            user: &state.user,
            complaints: &state.complaints,
            compose,
        }))
    })?;

    html_response(page)
}

pub fn create(store: &Store, form: &Params, today: NaiveDate) -> ResultResp {
    let new = NewComplaint {
        title: text(form, "title"),
        description: text(form, "description"),
        request_type: choice(form, "request_type", RequestType::parse, RequestType::Maintenance)?,
    };

    store.with_state(|state| add_complaint(state, new, today))?;
    redirect_response("/complaints")
}

pub fn update_status(store: &Store, id: &str, form: &Params, today: NaiveDate) -> ResultResp {
    let status = required_choice(form, "status", ComplaintStatus::parse)?;

    store.with_state(|state| update_complaint_status(state, id, status, today))?;
    redirect_response("/complaints")
}
