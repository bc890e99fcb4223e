use crate::domain::ComplaintStatus;
use crate::errors::ServerError;
use crate::tests::utils::{location, officer_store, page, post_form, resident_store, send, today};

#[test]
fn resident_sees_help_center_and_form() {
    let store = resident_store();

    let body = page(&store, "/complaints");
    assert!(body.contains("Help Center"));
    assert!(body.contains("New Service Request"));
    assert!(!body.contains("Submit Service Request"));

    let body = page(&store, "/complaints?compose=1");
    assert!(body.contains("Submit Service Request"));
    assert!(body.contains("Close Form"));
}

#[test]
fn resident_submission_is_pending_and_listed_first() {
    let store = resident_store();

    let resp = send(
        &store,
        post_form(
            "/complaints",
            "title=Gate+sensor&description=Front+gate+sensor+not+working&request_type=security",
        ),
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/complaints");

    store
        .with_state(|state| {
            let c = &state.complaints[0];
            assert_eq!(c.id, "c2");
            assert_eq!(c.status, ComplaintStatus::Pending);
            assert_eq!(c.user_id, "u1");
            assert_eq!(c.created_at, today());
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/complaints");
    let new = body.find("Gate sensor").unwrap();
    let old = body.find("Broken Streetlight").unwrap();
    assert!(new < old);
}

#[test]
fn missing_description_is_rejected() {
    let store = resident_store();

    let result = send(&store, post_form("/complaints", "title=Leak&description="));

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn officers_cannot_file_requests() {
    let store = officer_store();

    let result = send(&store, post_form("/complaints", "title=Leak&description=Pipe"));

    assert!(matches!(result, Err(ServerError::Forbidden(_))));
}

#[test]
fn officer_table_has_resident_column_and_status_picker() {
    let store = officer_store();

    let body = page(&store, "/complaints");

    assert!(body.contains("<th>Resident</th>"));
    assert!(body.contains("John Doe"));
    assert!(body.contains("action=\"/complaints/c1/status\""));
    assert!(body.contains("Working"));
    assert!(!body.contains("Help Center"));
}

#[test]
fn resident_table_hides_resident_column() {
    let store = resident_store();

    let body = page(&store, "/complaints");

    assert!(!body.contains("<th>Resident</th>"));
    assert!(!body.contains("/complaints/c1/status"));
}

#[test]
fn officer_resolves_request() {
    let store = officer_store();

    let resp = send(&store, post_form("/complaints/c1/status", "status=resolved")).unwrap();

    assert_eq!(resp.status(), 302);
    store
        .with_state(|state| {
            assert_eq!(state.complaints[0].status, ComplaintStatus::Resolved);
            assert_eq!(state.complaints[0].updated_at, today());
            Ok(())
        })
        .unwrap();
}

#[test]
fn status_accepts_display_label() {
    let store = officer_store();

    send(&store, post_form("/complaints/c1/status", "status=Closed")).unwrap();

    store
        .with_state(|state| {
            assert_eq!(state.complaints[0].status, ComplaintStatus::Closed);
            Ok(())
        })
        .unwrap();
}

#[test]
fn bad_status_is_rejected_and_unknown_id_is_not_found() {
    let store = officer_store();

    let result = send(&store, post_form("/complaints/c1/status", "status=escalated"));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let result = send(&store, post_form("/complaints/c1/status", ""));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let result = send(&store, post_form("/complaints/c77/status", "status=closed"));
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn residents_cannot_change_status() {
    let store = resident_store();

    let result = send(&store, post_form("/complaints/c1/status", "status=closed"));

    assert!(matches!(result, Err(ServerError::Forbidden(_))));
}

#[test]
fn status_form_targets_encoded_id() {
    let store = officer_store();
    store
        .with_state(|state| {
            state.complaints[0].id = "c 1/a".to_string();
            Ok(())
        })
        .unwrap();

    let body = page(&store, "/complaints");
    assert!(body.contains("action=\"/complaints/c+1%2Fa/status\""));

    send(&store, post_form("/complaints/c+1%2Fa/status", "status=closed")).unwrap();
    store
        .with_state(|state| {
            assert_eq!(state.complaints[0].status, ComplaintStatus::Closed);
            Ok(())
        })
        .unwrap();
}
